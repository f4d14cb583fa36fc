use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

use super::*;

#[test]
fn trigger_confirmed_immediately() {
    let expectations = [
        write(Register::SYS_TRIGGER, 0x20),
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::SYS_TRIGGER, 0x00),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger(SysTrigger::RST_SYS), Ok(()));
    assert!(delay.waits_ms.is_empty());
    i2c.done();
}

#[test]
fn trigger_swallows_bus_errors_while_rebooting() {
    const FAILURES: usize = 4;

    let mut expectations = vec![write(Register::SYS_TRIGGER, 0x20)];
    expectations.extend((0..FAILURES).map(|_| read_nack(Register::CHIP_ID)));
    expectations.push(read(Register::CHIP_ID, &[BNO055_CHIP_ID]));
    // Exactly one clear, anything after it would be an unexpected transaction.
    expectations.push(write(Register::SYS_TRIGGER, 0x00));

    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger(SysTrigger::RST_SYS), Ok(()));
    assert_eq!(delay.waits_ms, vec![TRIGGER_POLL_INTERVAL_MS; FAILURES]);
    i2c.done();
}

#[test]
fn trigger_ignores_wrong_identity_values() {
    let expectations = [
        write(Register::SYS_TRIGGER, 0x01),
        read(Register::CHIP_ID, &[0x00]),
        read_nack(Register::CHIP_ID),
        read(Register::CHIP_ID, &[0xFF]),
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::SYS_TRIGGER, 0x00),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger(SysTrigger::SELF_TEST), Ok(()));
    assert_eq!(delay.waits_ms.len(), 3);
    i2c.done();
}

#[test]
fn trigger_write_failure_is_not_swallowed() {
    let expectations = [write(Register::SYS_TRIGGER, 0x40).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger(SysTrigger::RST_INT), Err(Error::Transport(ErrorKind::Other)));
    i2c.done();
}

#[test]
fn bounded_trigger_succeeds_within_deadline() {
    let expectations = [
        write(Register::SYS_TRIGGER, 0x80),
        read_nack(Register::CHIP_ID),
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::SYS_TRIGGER, 0x00),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger_within(SysTrigger::CLK_SEL, 1000), Ok(()));
    assert_eq!(delay.waits_ms, vec![TRIGGER_POLL_INTERVAL_MS]);
    i2c.done();
}

#[test]
fn bounded_trigger_times_out_without_clearing() {
    // Polls at 0, 50 and 100 ms, then the 100 ms deadline is spent.
    let expectations = [
        write(Register::SYS_TRIGGER, 0x20),
        read_nack(Register::CHIP_ID),
        read_nack(Register::CHIP_ID),
        read_nack(Register::CHIP_ID),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger_within(SysTrigger::RST_SYS, 100), Err(Error::TriggerTimeout));
    assert_eq!(delay.waits_ms, vec![TRIGGER_POLL_INTERVAL_MS; 2]);
    i2c.done();
}

#[test]
fn bounded_trigger_never_waits_past_deadline() {
    // Polls at 0, 50, 100 and 120 ms, the last pause is cut short.
    let expectations = [
        write(Register::SYS_TRIGGER, 0x20),
        read_nack(Register::CHIP_ID),
        read_nack(Register::CHIP_ID),
        read(Register::CHIP_ID, &[0x00]),
        read_nack(Register::CHIP_ID),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger_within(SysTrigger::RST_SYS, 120), Err(Error::TriggerTimeout));
    assert_eq!(delay.waits_ms, vec![50, 50, 20]);
    assert_eq!(delay.waits_ms.iter().sum::<u32>(), 120);
    i2c.done();
}

#[test]
fn bounded_trigger_confirmed_on_the_deadline_poll() {
    let expectations = [
        write(Register::SYS_TRIGGER, 0x20),
        read_nack(Register::CHIP_ID),
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::SYS_TRIGGER, 0x00),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger_within(SysTrigger::RST_SYS, 30), Ok(()));
    assert_eq!(delay.waits_ms, vec![30]);
    i2c.done();
}

#[test]
fn bounded_trigger_with_zero_timeout_polls_once() {
    let expectations = [
        write(Register::SYS_TRIGGER, 0x20),
        read_nack(Register::CHIP_ID),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.system_trigger_within(SysTrigger::RST_SYS, 0), Err(Error::TriggerTimeout));
    assert!(delay.waits_ms.is_empty());
    i2c.done();
}
