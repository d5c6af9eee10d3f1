//! Various chain-specific test dummies

extern crate bitcrypto;
extern crate chain;
extern crate primitives;

mod chain_builder;
mod header_builder;

pub use chain_builder::ChainBuilder;
pub use header_builder::{mine, HeaderBuilder};

use chain::BlockHeader;

pub fn header_builder() -> HeaderBuilder {
	HeaderBuilder::default()
}

/// Mainnet genesis header.
pub fn genesis() -> BlockHeader {
	"0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c".into()
}

// https://webbtc.com/block/00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048
pub fn block_h1() -> BlockHeader {
	"010000006fe28c0ab6f1b372c1a6a246ae63f74f931e8365e15a089c68d6190000000000982051fd1e4ba744bbbe680e1fee14677ba1a3c3540bf7b1cdb606e857233e0e61bc6649ffff001d01e36299".into()
}

// https://webbtc.com/block/00000000000000001e8d6829a8a21adc5d38d0a473b144b6765798e61f98bd1d
pub fn block_h125552() -> BlockHeader {
	"0100000081cd02ab7e569e8bcd9317e2fe99f2de44d49ab2b8851ba4a308000000000000e320b6c2fffc8d750423db8b1eb942ae710e951ed797f7affc8892b0f1fc122bc7f5d74df2b9441a42a14695".into()
}
