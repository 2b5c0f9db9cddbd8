mod features;
pub use features::Features;
