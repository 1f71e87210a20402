/// Note attached to items the demand sync adds on its own
pub const NOTE_AUTO_ADDED: &str = "auto-added";

/// Note attached to items added because stock fell below the product minimum
pub const NOTE_BELOW_MINIMUM: &str = "below minimum stock";
