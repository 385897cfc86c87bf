/// Delay before a hover-opened dropdown closes, so the pointer can cross the gap
/// between the trigger and the panel.
pub const CLOSE_DELAY_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownId {
  Product,
  Solutions,
  Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
  #[default]
  Closed,
  MenuOpen,
  DropdownOpen(DropdownId),
  LanguageOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
  MenuButton,
  Dropdown(DropdownId),
  Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
  HoverEnter(DropdownId),
  HoverLeave,
  Click(ClickTarget),
  OutsideClick,
  RouteChanged,
  Escape,
  CloseTimerFired(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
  None,
  /// Deliver `CloseTimerFired(token)` after `delay_ms`.
  ScheduleClose { token: u64, delay_ms: u64 },
}

/// Open/closed state of the header: mobile drawer, dropdowns and the language menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavController {
  state: NavState,
  hover_capable: bool,
  next_token: u64,
  pending_close: Option<u64>,
  hovered: Option<DropdownId>,
}

impl NavController {
  pub fn new(hover_capable: bool) -> Self {
    Self { state: NavState::Closed, hover_capable, next_token: 0, pending_close: None, hovered: None }
  }

  pub fn state(&self) -> NavState {
    self.state
  }

  pub fn is_open(&self, id: DropdownId) -> bool {
    self.state == NavState::DropdownOpen(id)
  }

  pub fn set_hover_capable(&mut self, hover_capable: bool) {
    self.hover_capable = hover_capable;
  }

  pub fn handle(&mut self, event: NavEvent) -> NavEffect {
    match event {
      NavEvent::HoverEnter(id) => {
        if self.hover_capable {
          self.pending_close = None;
          self.hovered = Some(id);
          self.state = NavState::DropdownOpen(id);
        }
      },
      NavEvent::HoverLeave => {
        self.hovered = None;
        if self.hover_capable && matches!(self.state, NavState::DropdownOpen(_)) {
          self.next_token += 1;
          self.pending_close = Some(self.next_token);
          return NavEffect::ScheduleClose { token: self.next_token, delay_ms: CLOSE_DELAY_MS };
        }
      },
      NavEvent::CloseTimerFired(token) => {
        if self.pending_close == Some(token) {
          self.close_all();
        }
      },
      // a click on the trigger of a dropdown the pointer already opened keeps it open
      NavEvent::Click(ClickTarget::Dropdown(id)) if self.hover_capable && self.hovered == Some(id) => {
        self.pending_close = None;
        self.state = NavState::DropdownOpen(id);
      },
      NavEvent::Click(target) => {
        self.pending_close = None;
        self.state = match (target, self.state) {
          (ClickTarget::MenuButton, NavState::MenuOpen) => NavState::Closed,
          (ClickTarget::MenuButton, _) => NavState::MenuOpen,
          (ClickTarget::Dropdown(id), NavState::DropdownOpen(open)) if open == id => NavState::Closed,
          (ClickTarget::Dropdown(id), _) => NavState::DropdownOpen(id),
          (ClickTarget::Language, NavState::LanguageOpen) => NavState::Closed,
          (ClickTarget::Language, _) => NavState::LanguageOpen,
        };
      },
      NavEvent::OutsideClick | NavEvent::RouteChanged | NavEvent::Escape => self.close_all(),
    }
    NavEffect::None
  }

  fn close_all(&mut self) {
    self.state = NavState::Closed;
    self.pending_close = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn outside_click_closes_an_open_dropdown() {
    let mut nav = NavController::new(false);
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Product)));
    assert!(nav.is_open(DropdownId::Product));
    nav.handle(NavEvent::OutsideClick);
    assert_eq!(nav.state(), NavState::Closed);
  }

  #[test]
  fn route_change_closes_every_menu() {
    for target in [ClickTarget::MenuButton, ClickTarget::Language, ClickTarget::Dropdown(DropdownId::Company)] {
      let mut nav = NavController::new(true);
      nav.handle(NavEvent::Click(target));
      assert_ne!(nav.state(), NavState::Closed);
      nav.handle(NavEvent::RouteChanged);
      assert_eq!(nav.state(), NavState::Closed);
    }
  }

  #[test]
  fn clicking_the_same_trigger_toggles() {
    let mut nav = NavController::new(false);
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Solutions)));
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Company)));
    assert!(nav.is_open(DropdownId::Company));
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Company)));
    assert_eq!(nav.state(), NavState::Closed);

    nav.handle(NavEvent::Click(ClickTarget::MenuButton));
    assert_eq!(nav.state(), NavState::MenuOpen);
    nav.handle(NavEvent::Click(ClickTarget::MenuButton));
    assert_eq!(nav.state(), NavState::Closed);
  }

  #[test]
  fn hover_leave_closes_after_the_debounce() {
    let mut nav = NavController::new(true);
    nav.handle(NavEvent::HoverEnter(DropdownId::Product));
    let token = match nav.handle(NavEvent::HoverLeave) {
      NavEffect::ScheduleClose { token, delay_ms } => {
        assert_eq!(delay_ms, CLOSE_DELAY_MS);
        token
      },
      NavEffect::None => panic!("leaving an open dropdown must schedule a close"),
    };
    assert!(nav.is_open(DropdownId::Product), "still open until the timer fires");
    nav.handle(NavEvent::CloseTimerFired(token));
    assert_eq!(nav.state(), NavState::Closed);
  }

  #[test]
  fn re_entering_cancels_the_pending_close() {
    let mut nav = NavController::new(true);
    nav.handle(NavEvent::HoverEnter(DropdownId::Product));
    let NavEffect::ScheduleClose { token, .. } = nav.handle(NavEvent::HoverLeave) else {
      panic!("expected a scheduled close");
    };
    nav.handle(NavEvent::HoverEnter(DropdownId::Product));
    nav.handle(NavEvent::CloseTimerFired(token));
    assert!(nav.is_open(DropdownId::Product));
  }

  #[test]
  fn stale_timer_does_not_close_a_newer_dropdown() {
    let mut nav = NavController::new(true);
    nav.handle(NavEvent::HoverEnter(DropdownId::Product));
    let NavEffect::ScheduleClose { token: stale, .. } = nav.handle(NavEvent::HoverLeave) else {
      panic!("expected a scheduled close");
    };
    nav.handle(NavEvent::HoverEnter(DropdownId::Company));
    nav.handle(NavEvent::HoverLeave);
    nav.handle(NavEvent::CloseTimerFired(stale));
    assert!(nav.is_open(DropdownId::Company));
  }

  #[test]
  fn touch_devices_ignore_hover() {
    let mut nav = NavController::new(false);
    nav.handle(NavEvent::HoverEnter(DropdownId::Product));
    assert_eq!(nav.state(), NavState::Closed);
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Product)));
    assert_eq!(nav.handle(NavEvent::HoverLeave), NavEffect::None);
    assert!(nav.is_open(DropdownId::Product));
  }

  #[test]
  fn clicking_a_hovered_trigger_keeps_it_open() {
    let mut nav = NavController::new(true);
    nav.handle(NavEvent::HoverEnter(DropdownId::Solutions));
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Solutions)));
    assert!(nav.is_open(DropdownId::Solutions));

    // once the pointer left, the trigger toggles again
    nav.handle(NavEvent::HoverLeave);
    nav.handle(NavEvent::Click(ClickTarget::Dropdown(DropdownId::Solutions)));
    assert_eq!(nav.state(), NavState::Closed);
  }
}
