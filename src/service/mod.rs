pub mod asset_store;
pub mod cache;
pub mod gameapi;
pub mod icons;
pub mod lookup;
pub mod preloader;
pub mod randomizer;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod testing;
