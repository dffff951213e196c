//! Well-known privilege names and operation type codes.

/// Privilege names granted to users through privilege scopes.
pub mod privileges {
    /// Access to the stock operations screens.
    pub const VIEW_STOCK_OPERATIONS: &str = "App: stockmanagement.stockoperations";
    /// Create and edit stock operations.
    pub const MUTATE_STOCK_OPERATIONS: &str = "Task: stockmanagement.stockoperations.mutate";
    /// Approve, reject or return submitted stock operations.
    pub const APPROVE_STOCK_OPERATIONS: &str = "Task: stockmanagement.stockoperations.approve";
    /// Receive items of a dispatched transfer.
    pub const RECEIVE_ITEMS: &str = "Task: stockmanagement.stockoperations.receiveitems";
}

/// Codes identifying the configured stock operation types.
pub mod operation_codes {
    pub const ADJUSTMENT: &str = "adjustment";
    pub const DISPOSED: &str = "disposed";
    pub const TRANSFER_OUT: &str = "transferout";
    pub const RECEIPT: &str = "receipt";
    pub const RETURNED: &str = "returned";
    pub const STOCK_ISSUE: &str = "stockissue";
    pub const REQUISITION: &str = "requisition";
    pub const STOCK_TAKE: &str = "stocktake";
    pub const OPENING_STOCK: &str = "initial";
}
