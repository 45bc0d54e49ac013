/// Tick-driven resend cooldown. The embedding UI drives `tick()` once
/// per second; the flow only consults `is_ready()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::Cooldown;

    #[test]
    fn counts_down_to_ready() {
        let mut cooldown = Cooldown::default();
        assert!(cooldown.is_ready());

        cooldown.start(3);
        assert!(!cooldown.is_ready());
        assert_eq!(cooldown.tick(), 2);
        assert_eq!(cooldown.tick(), 1);
        assert_eq!(cooldown.tick(), 0);
        assert!(cooldown.is_ready());
    }

    #[test]
    fn tick_saturates_at_zero() {
        let mut cooldown = Cooldown::default();
        assert_eq!(cooldown.tick(), 0);
        assert!(cooldown.is_ready());
    }
}
