use crate::BlockId;
use crc32fast::Hasher;
use uuid::Uuid;

/// Source of fresh block ids
pub trait IdGenerator {
    fn generate_id(&mut self) -> BlockId;
}

/// Derive a short stable seed from an arbitrary string using CRC32
pub fn get_seed_id(seed: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Deterministic generator: `<crc32(seed)>-1`, `<crc32(seed)>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    seed: String,
    count: u32,
}

impl SequentialIdGenerator {
    pub fn new(seed: &str) -> Self {
        Self {
            seed: get_seed_id(seed),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&mut self) -> BlockId {
        self.count += 1;
        BlockId::new(format!("{}-{}", self.seed, self.count))
    }
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&mut self) -> BlockId {
        BlockId::new(Uuid::new_v4().simple().to_string())
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn generate_id(&mut self) -> BlockId {
        (**self).generate_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn generate_id(&mut self) -> BlockId {
        (**self).generate_id()
    }
}
