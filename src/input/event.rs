/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavCommand`](crate::navigation::NavCommand) values.
///
/// # Example
///
/// ```
/// use stagegrid::input::{InputEvent, InputProcessor};
/// use stagegrid::navigation::{Direction, NavCommand};
///
/// let input = InputProcessor::new();
/// let cmd = input.handle_event(InputEvent::KeyPressed {
///     key: "ArrowRight".into(),
/// });
/// assert_eq!(cmd, Some(NavCommand::Go(Direction::Right)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyPressed {
        /// Key string in `KeyCode` debug form, e.g. `"ArrowLeft"`.
        key: String,
    },
    /// A link inside the presentation was activated.
    LinkActivated {
        /// Link target as authored, e.g. `"#/intro"`.
        href: String,
    },
    /// A step was clicked directly.
    StepClicked {
        /// Identifier of the clicked step.
        id: String,
    },
}
