use bitflags::bitflags;

bitflags! {
    /// Action bits of the `SYS_TRIGGER` register (datasheet section 4.3.63). Any combination may
    /// be set at once, the empty set is used to clear the register after the device confirmed
    /// the action.
    ///
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SysTrigger: u8 {
        /// Use the external oscillator, only set this if an external crystal is connected.
        const CLK_SEL = 0b1000_0000;
        /// Reset all interrupt status bits and the INT output.
        const RST_INT = 0b0100_0000;
        /// Reset the system.
        const RST_SYS = 0b0010_0000;
        /// Trigger the power on self test.
        const SELF_TEST = 0b0000_0001;
    }
}

impl SysTrigger {
    /// Normal state of the register, no action pending.
    pub const NO_TRIGGER: SysTrigger = SysTrigger::empty();

    pub fn as_register(&self) -> u8 {
        self.bits()
    }
}

impl Default for SysTrigger {
    fn default() -> Self {
        SysTrigger::NO_TRIGGER
    }
}
