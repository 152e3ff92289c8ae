//! Per-row contextual actions.

use std::fmt;
use std::sync::Arc;

/// Handler invoked with the row an action was triggered on.
pub type ActionHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Visual variant of an action. Destructive actions are drawn with warning
/// emphasis; confirmation is up to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
}

/// One entry of a row's trailing action menu.
pub struct ActionItem<R> {
    label: String,
    icon: Option<String>,
    handler: ActionHandler<R>,
    variant: ActionVariant,
}

impl<R> ActionItem<R> {
    pub fn new(label: impl Into<String>, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
            variant: ActionVariant::Default,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ActionVariant {
        self.variant
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ActionVariant::Destructive
    }

    /// Menu text with the icon prefixed, if one is set.
    pub fn menu_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.label),
            None => self.label.clone(),
        }
    }

    /// Runs the handler against a row.
    pub fn invoke(&self, row: &R) {
        (self.handler)(row)
    }
}

impl<R> Clone for ActionItem<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            handler: Arc::clone(&self.handler),
            variant: self.variant,
        }
    }
}

impl<R> fmt::Debug for ActionItem<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
