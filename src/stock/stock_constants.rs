/// Transaction type recorded when stock enters through a purchase or cart import
pub const TRANSACTION_TYPE_PURCHASE: &str = "purchase";

/// Transaction type recorded when stock is consumed
pub const TRANSACTION_TYPE_CONSUME: &str = "consume";

/// Transaction type recorded when a product's lots are cleared wholesale
pub const TRANSACTION_TYPE_INVENTORY_CORRECTION: &str = "inventory-correction";
