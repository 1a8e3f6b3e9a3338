use super::command::Direction;
use super::renderer::Renderer;
use super::scheduler::Scheduler;
use super::Navigator;
use crate::deck::{GridLocation, Step};
use crate::deep_link::History;
use crate::error::NavigationError;

impl<R: Renderer, S: Scheduler, H: History> Navigator<R, S, H> {
    /// Select the first step authored at `location`.
    ///
    /// If the active step has an exit override, that location is used
    /// instead of `location`.
    ///
    /// # Errors
    ///
    /// [`NavigationError::NoActiveStep`] before the first selection,
    /// [`NavigationError::LocationNotFound`] if no step occupies the
    /// destination, or the rejection of [`select`](Self::select).
    pub fn go_to_location(
        &mut self,
        location: GridLocation,
    ) -> Result<&Step, NavigationError> {
        let active = self.active_step().ok_or(NavigationError::NoActiveStep)?;
        let destination = active.exit_override().unwrap_or(location);
        let id = self
            .deck
            .step_at(destination)
            .ok_or(NavigationError::LocationNotFound(destination))?
            .id()
            .to_owned();
        self.select(&id)
    }

    /// Move one grid cell from the active step's authored location.
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go(&mut self, direction: Direction) -> Result<&Step, NavigationError> {
        let from = self
            .active_step()
            .ok_or(NavigationError::NoActiveStep)?
            .location();
        self.go_to_location(direction.apply(from))
    }

    /// `x - 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_left(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::Left)
    }

    /// `x + 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_right(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::Right)
    }

    /// `y + 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_up(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::Up)
    }

    /// `y - 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_down(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::Down)
    }

    /// `z + 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_page_up(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::PageUp)
    }

    /// `z - 1`. See [`go`](Self::go).
    ///
    /// # Errors
    ///
    /// Same as [`go_to_location`](Self::go_to_location).
    pub fn go_page_down(&mut self) -> Result<&Step, NavigationError> {
        self.go(Direction::PageDown)
    }
}
