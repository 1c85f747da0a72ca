/// User intents dispatched by the renderer.
///
/// Tagged values instead of per-item callbacks: the index travels with
/// the action, so there is no closure-capture state anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    GoCheckout,
    GoManage,
    GoHome,
    Quit,

    // Checkout screen
    SelectCheckoutItem(usize),
    SubmitCheckoutQuantity,
    CompleteCheckout,

    // Manage screen
    OpenAdd,
    OpenEdit(usize),

    // Edit dialog
    SaveItem,
    DeleteItem,
    FocusNextField,

    // Text input routed to the active buffer (checkout quantity or
    // the focused edit-dialog field)
    Input(char),
    Backspace,
}
