use crate::vcode;

/// Constants for wheel scroll directions
pub const WHEEL_VERTICAL_DIRECTION: u8 = vcode::WHEEL_VERTICAL_DIRECTION;
/// Constant for horizontal wheel scroll direction
pub const WHEEL_HORIZONTAL_DIRECTION: u8 = vcode::WHEEL_HORIZONTAL_DIRECTION;

/// Represents a mouse wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEvent {
    /// The number of clicks.
    pub clicks: u16,
    /// The x-coordinate of the mouse pointer.
    pub x: i16,
    /// The y-coordinate of the mouse pointer.
    pub y: i16,
    /// The type of mouse wheel event (unit or block scroll).
    pub type_: u8,
    /// The amount of scrolling.
    pub amount: u16,
    /// The number of rotation units the mouse wheel was scrolled.
    pub rotation: i16,
    /// The direction of the scroll (vertical or horizontal).
    pub direction: u8,
    /// Milliseconds since the clock `crate::hook::now_ms` uses, taken when
    /// the event was produced.
    pub timestamp: u64,
    /// The modifier/button mask live at the moment of the event.
    pub modifier_mask: u16,
}

impl WheelEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clicks: u16,
        x: i16,
        y: i16,
        type_: u8,
        amount: u16,
        rotation: i16,
        direction: u8,
        timestamp: u64,
        modifier_mask: u16,
    ) -> Self {
        WheelEvent {
            clicks,
            x,
            y,
            type_,
            amount,
            rotation,
            direction,
            timestamp,
            modifier_mask,
        }
    }

    /// True if the event is a vertical scroll.
    pub fn is_vertical(&self) -> bool {
        self.direction == WHEEL_VERTICAL_DIRECTION
    }

    /// True if the event is a horizontal scroll.
    pub fn is_horizontal(&self) -> bool {
        self.direction == WHEEL_HORIZONTAL_DIRECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_event_new() {
        let wheel_event = WheelEvent::new(1, 100, 200, vcode::WHEEL_UNIT_SCROLL, 3, -120, WHEEL_VERTICAL_DIRECTION, 1000, 0);

        assert_eq!(wheel_event.clicks, 1);
        assert_eq!(wheel_event.x, 100);
        assert_eq!(wheel_event.y, 200);
        assert_eq!(wheel_event.type_, vcode::WHEEL_UNIT_SCROLL);
        assert_eq!(wheel_event.amount, 3);
        assert_eq!(wheel_event.rotation, -120);
        assert_eq!(wheel_event.direction, WHEEL_VERTICAL_DIRECTION);
    }

    #[test]
    fn test_is_vertical() {
        let vertical_event = WheelEvent::new(1, 100, 200, vcode::WHEEL_UNIT_SCROLL, 3, -120, WHEEL_VERTICAL_DIRECTION, 1000, 0);
        let horizontal_event = WheelEvent::new(1, 100, 200, vcode::WHEEL_UNIT_SCROLL, 3, -120, WHEEL_HORIZONTAL_DIRECTION, 1000, 0);

        assert!(vertical_event.is_vertical());
        assert!(!horizontal_event.is_vertical());
    }

    #[test]
    fn test_is_horizontal() {
        let vertical_event = WheelEvent::new(1, 100, 200, vcode::WHEEL_UNIT_SCROLL, 3, -120, WHEEL_VERTICAL_DIRECTION, 1000, 0);
        let horizontal_event = WheelEvent::new(1, 100, 200, vcode::WHEEL_UNIT_SCROLL, 3, -120, WHEEL_HORIZONTAL_DIRECTION, 1000, 0);

        assert!(!vertical_event.is_horizontal());
        assert!(horizontal_event.is_horizontal());
    }
}
