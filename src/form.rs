use crate::types::{SearchFilters, SearchMode};

/// Starting position of the price slider. Inert until the price filter is
/// enabled.
pub const DEFAULT_PRICE_SLIDER: f64 = 25.0;

/// Mutable state of the search form. A single owner mutates it in response
/// to user events; nothing else holds a reference between events.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub description: String,
    pub title: String,
    pub mode: SearchMode,
    pub available: bool,
    pub price_slider: f64,
    pub price_enabled: bool,
    pub restaurant: String,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            description: String::new(),
            title: String::new(),
            mode: SearchMode::Vector,
            available: false,
            price_slider: DEFAULT_PRICE_SLIDER,
            price_enabled: false,
            restaurant: String::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the availability checkbox and return the new checked state.
    pub fn toggle_available(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }

    /// Flip the price filter and return the new enabled state. The slider
    /// keeps its position either way.
    pub fn toggle_price(&mut self) -> bool {
        self.price_enabled = !self.price_enabled;
        self.price_enabled
    }

    /// Read the form at submission time. Text fields are trimmed here so
    /// validation and request building see canonical values.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            description_text: self.description.trim().to_string(),
            title_text: self.title.trim().to_string(),
            selected_mode: self.mode,
            available: self.available,
            price_slider_value: self.price_slider,
            price_filter_enabled: self.price_enabled,
            selected_restaurant: self.restaurant.trim().to_string(),
        }
    }
}

/// Point-in-time read of the form controls, taken when the user submits.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub description_text: String,
    pub title_text: String,
    pub selected_mode: SearchMode,
    pub available: bool,
    pub price_slider_value: f64,
    pub price_filter_enabled: bool,
    pub selected_restaurant: String,
}

impl FormSnapshot {
    /// Compose the active filters. A filter appears only if the user turned
    /// it on: an unchecked box, a disabled price toggle or an empty
    /// restaurant selection all mean the field is absent from the request.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            available: if self.available { Some(true) } else { None },
            max_price: if self.price_filter_enabled {
                Some(self.price_slider_value)
            } else {
                None
            },
            restaurant: if self.selected_restaurant.is_empty() {
                None
            } else {
                Some(self.selected_restaurant.clone())
            },
        }
    }
}
