/// Field focus inside the edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Quantity,
    Price,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Name => EditField::Quantity,
            EditField::Quantity => EditField::Price,
            EditField::Price => EditField::Name,
        }
    }
}

/// Editable text buffers for the add/edit dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditFields {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Which screen is active, plus the transient state it needs.
///
/// Exactly one state is active at a time; transitions happen only
/// inside the controller. Entering a screen starts it fresh except for
/// the checkout selection, which survives re-renders until commit or a
/// successful quantity entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Home,
    Checkout {
        selected: Option<usize>,
        quantity_input: String,
        warning: Option<String>,
    },
    Manage,
    EditDialog {
        /// Id of the item being edited; `None` means Add mode
        target: Option<i64>,
        fields: EditFields,
        focus: EditField,
        warning: Option<String>,
    },
}

impl ViewState {
    pub fn checkout() -> Self {
        ViewState::Checkout {
            selected: None,
            quantity_input: String::new(),
            warning: None,
        }
    }

    pub fn add_dialog() -> Self {
        ViewState::EditDialog {
            target: None,
            fields: EditFields::default(),
            focus: EditField::Name,
            warning: None,
        }
    }

    pub fn edit_dialog(target: i64, fields: EditFields) -> Self {
        ViewState::EditDialog {
            target: Some(target),
            fields,
            focus: EditField::Name,
            warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut focus = EditField::Name;
        focus = focus.next();
        assert_eq!(focus, EditField::Quantity);
        focus = focus.next();
        assert_eq!(focus, EditField::Price);
        focus = focus.next();
        assert_eq!(focus, EditField::Name);
    }

    #[test]
    fn test_fresh_checkout_carries_nothing() {
        let state = ViewState::checkout();
        assert_eq!(
            state,
            ViewState::Checkout {
                selected: None,
                quantity_input: String::new(),
                warning: None,
            }
        );
    }
}
