mod batches;
mod config;
mod constant_folding;
mod extension;
mod properties;
mod pushdown;
