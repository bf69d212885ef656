pub mod cbc;
pub mod glucose;
pub mod kidney;
pub mod lipids;
pub mod liver;
pub mod thyroid;
