pub mod champion;
pub mod ids;
pub mod image;
pub mod item;
pub mod lane;
pub mod randomizer;
pub mod rune;
pub mod snapshot;
pub mod spell;
