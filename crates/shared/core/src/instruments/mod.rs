mod lot_size;

pub use lot_size::LotSize;
