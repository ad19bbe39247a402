//! GPIO backlight switch
//!
//! Most ST7796 modules bring the LED supply out on a pin (directly or
//! via a transistor). This drives it as a plain on/off output; the pin
//! can be configured as active-high (default) or active-low.

use embedded_hal::digital::OutputPin;

/// Backlight output
pub struct Backlight<P> {
    pin: P,
    /// If true, backlight ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Creates a new backlight output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the backlight is ON when the pin is LOW
    ///
    /// The backlight starts dark; turn it on once the first frame is up.
    pub fn new(pin: P, inverted: bool) -> Result<Self, P::Error> {
        let mut backlight = Self {
            pin,
            inverted,
            on: false,
        };
        backlight.set_on(false)?;
        Ok(backlight)
    }

    /// Creates a backlight with an active-high pin
    pub fn new_active_high(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, false)
    }

    /// Creates a backlight with an active-low pin
    pub fn new_active_low(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, true)
    }

    /// Switches the backlight
    ///
    /// The reported state only changes once the pin write went through.
    pub fn set_on(&mut self, on: bool) -> Result<(), P::Error> {
        // XOR with polarity: on means high unless inverted
        if on != self.inverted {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_backlight() {
        let mut backlight = Backlight::new_active_high(MockPin::new()).unwrap();

        // Starts dark
        assert!(!backlight.is_on());
        assert!(!backlight.pin.high);

        // Turn on
        backlight.set_on(true).unwrap();
        assert!(backlight.is_on());
        assert!(backlight.pin.high);

        // Turn off
        backlight.set_on(false).unwrap();
        assert!(!backlight.is_on());
        assert!(!backlight.pin.high);
    }

    #[test]
    fn test_active_low_backlight() {
        let mut backlight = Backlight::new_active_low(MockPin::new()).unwrap();

        // Off holds the pin high for active-low modules
        assert!(!backlight.is_on());
        assert!(backlight.pin.high);

        // Turn on (pin goes low)
        backlight.set_on(true).unwrap();
        assert!(backlight.is_on());
        assert!(!backlight.pin.high);

        // Turn off (pin back high)
        backlight.set_on(false).unwrap();
        assert!(!backlight.is_on());
        assert!(backlight.pin.high);
    }

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    /// Pin whose driver rejects writes on demand
    struct FlakyPin {
        high: bool,
        fail: bool,
    }

    impl embedded_hal::digital::ErrorType for FlakyPin {
        type Error = PinFault;
    }

    impl OutputPin for FlakyPin {
        fn set_low(&mut self) -> Result<(), PinFault> {
            if self.fail {
                return Err(PinFault);
            }
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            if self.fail {
                return Err(PinFault);
            }
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_failed_pin_write_keeps_reported_state() {
        let pin = FlakyPin {
            high: false,
            fail: false,
        };
        let mut backlight = Backlight::new_active_high(pin).unwrap();
        assert!(!backlight.is_on());

        // The write never reached the hardware, so the state must not
        // claim the light came on
        backlight.pin.fail = true;
        assert!(backlight.set_on(true).is_err());
        assert!(!backlight.is_on());
        assert!(!backlight.pin.high);
    }
}
