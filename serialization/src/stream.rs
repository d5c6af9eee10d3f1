//! Stream used for serialization of Bitcoin structures

/// Serializes a value into a freshly allocated byte vector.
pub fn serialize<T>(t: &T) -> Vec<u8>
where
	T: Serializable,
{
	let mut stream = Stream::with_capacity(t.serialized_size());
	stream.append(t);
	stream.out()
}

pub trait Serializable {
	/// Serialize the struct and appends it to the end of stream.
	fn serialize(&self, s: &mut Stream);

	/// Hint about the size of serialized struct.
	fn serialized_size(&self) -> usize;
}

/// Stream used for serialization of Bitcoin structures
#[derive(Default)]
pub struct Stream {
	buffer: Vec<u8>,
}

impl Stream {
	/// New stream
	pub fn new() -> Self {
		Stream { buffer: Vec::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Stream {
			buffer: Vec::with_capacity(capacity),
		}
	}

	/// Serializes the struct and appends it to the end of stream.
	pub fn append<T>(&mut self, t: &T) -> &mut Self
	where
		T: Serializable,
	{
		t.serialize(self);
		self
	}

	/// Appends raw bytes to the end of the stream.
	pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	/// Full stream.
	pub fn out(self) -> Vec<u8> {
		self.buffer
	}
}
