mod feature;
mod filters;
pub use feature::WidgetFeature;
pub use filters::WidgetFilters;
