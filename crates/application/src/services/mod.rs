mod block_attributor;

pub use block_attributor::BlockAttributor;
