use std::time::Duration;

/// Why an auto-rotating widget is (not) advancing. Reduced motion wins over
/// a hidden tab, which wins over hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
  #[default]
  Running,
  PausedByVisibility,
  PausedByHover,
  PausedByPreference,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rotator {
  index: usize,
  len: usize,
  pause: PauseState,
  interval: Duration,
  hidden: bool,
  hovered: bool,
  reduced_motion: bool,
}

impl Rotator {
  pub fn new(len: usize, interval: Duration) -> Self {
    Self {
      index: 0,
      len,
      pause: PauseState::Running,
      interval,
      hidden: false,
      hovered: false,
      reduced_motion: false,
    }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn interval(&self) -> Duration {
    self.interval
  }

  pub fn pause_state(&self) -> PauseState {
    self.pause
  }

  pub fn is_running(&self) -> bool {
    self.pause == PauseState::Running
  }

  /// Transitions are only rendered when the user has not asked for reduced motion.
  pub fn animates(&self) -> bool {
    self.pause != PauseState::PausedByPreference
  }

  /// Timer callback. Advances (wrapping) only while running.
  pub fn tick(&mut self) -> bool {
    if !self.is_running() || self.len < 2 {
      return false;
    }
    self.index = (self.index + 1) % self.len;
    true
  }

  pub fn next(&mut self) {
    if self.len > 0 {
      self.index = (self.index + 1) % self.len;
    }
  }

  pub fn prev(&mut self) {
    if self.len > 0 {
      self.index = (self.index + self.len - 1) % self.len;
    }
  }

  pub fn go_to(&mut self, index: usize) {
    if index < self.len {
      self.index = index;
    }
  }

  pub fn set_hidden(&mut self, hidden: bool) {
    self.hidden = hidden;
    self.update_pause();
  }

  /// The pointer stays inside across a tab switch without a fresh `mouseenter`,
  /// so hover is remembered while another cause holds the pause.
  pub fn set_hovered(&mut self, hovered: bool) {
    self.hovered = hovered;
    self.update_pause();
  }

  pub fn set_reduced_motion(&mut self, reduced: bool) {
    self.reduced_motion = reduced;
    self.update_pause();
  }

  fn update_pause(&mut self) {
    self.pause = if self.reduced_motion {
      PauseState::PausedByPreference
    } else if self.hidden {
      PauseState::PausedByVisibility
    } else if self.hovered {
      PauseState::PausedByHover
    } else {
      PauseState::Running
    };
  }

  /// CSS classes for slide `i`. No transition class is ever emitted under reduced motion.
  pub fn slide_class(&self, i: usize) -> String {
    let mut class = String::from("slide");
    if i == self.index {
      class.push_str(" slide-active");
    }
    if self.animates() {
      class.push_str(" slide-animated");
    }
    class
  }
}
