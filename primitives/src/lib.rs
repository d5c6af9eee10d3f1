#[macro_use]
extern crate uint;

pub mod compact;

construct_uint! {
	pub struct U256(4);
}
