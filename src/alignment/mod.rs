pub mod extraction;
pub mod melody;
pub mod orthography;
pub mod pitch;
mod stats;
pub mod syllabify;
