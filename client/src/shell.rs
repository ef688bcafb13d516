use crate::form::FeedbackForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Acknowledged,
}

/// Swaps between the form and the post-submission acknowledgment.
pub struct App {
    view: View,
    form: FeedbackForm,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            view: View::Form,
            form: FeedbackForm::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FeedbackForm {
        &mut self.form
    }

    /// The form signalled a successful submission.
    pub fn acknowledge(&mut self) {
        self.view = View::Acknowledged;
    }

    /// Back to a fresh form, nothing carried over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::{App, View};

    #[test]
    fn test_acknowledge_swaps_view() {
        let mut app = App::new();
        assert_eq!(app.view(), View::Form);

        app.acknowledge();
        assert_eq!(app.view(), View::Acknowledged);
    }

    #[test]
    fn test_reset_leaves_no_residue() {
        let mut app = App::new();
        app.form_mut().set_name("Ada");
        app.acknowledge();

        app.reset();

        assert_eq!(app.view(), View::Form);
        assert_eq!(app.form().name(), "");
    }
}
