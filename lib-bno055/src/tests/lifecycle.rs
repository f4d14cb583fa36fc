use embedded_hal_mock::eh1::{delay::NoopDelay, i2c::Mock as I2cMock};

use super::*;

#[test]
fn begin_checks_identity_around_mode_switch() {
    let expectations = [
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::OPR_MODE, 0x00),
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut delay = RecordingDelay::default();
    let mut bno = Bno055::new(i2c.clone(), &mut delay);

    assert_eq!(bno.begin(), Ok(()));
    assert_eq!(delay.waits_ms, vec![MODE_SWITCH_DELAY_MS]);
    i2c.done();
}

#[test]
fn begin_rejects_wrong_chip_before_writing() {
    // Any write would hit a missing expectation and fail the test.
    let expectations = [read(Register::CHIP_ID, &[0x34])];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.begin(), Err(Error::IdentityMismatch(0x34)));
    i2c.done();
}

#[test]
fn begin_fails_when_device_vanishes_after_mode_switch() {
    let expectations = [
        read(Register::CHIP_ID, &[BNO055_CHIP_ID]),
        write(Register::OPR_MODE, 0x00),
        read(Register::CHIP_ID, &[0xFF]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.begin(), Err(Error::IdentityMismatch(0xFF)));
    i2c.done();
}

#[test]
fn begin_propagates_bus_errors() {
    let expectations = [read_nack(Register::CHIP_ID)];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.begin(), Err(Error::Transport(ErrorKind::Other)));
    i2c.done();
}

#[test]
fn alternate_address_is_used_on_the_bus() {
    let expectations = [I2cTransaction::write_read(0x29, vec![0x00], vec![BNO055_CHIP_ID])];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new_with_address(i2c.clone(), NoopDelay::new(), DeviceAddress::Alternate);

    assert_eq!(bno.address(), 0x29);
    assert_eq!(bno.read_chip_id(), Ok(BNO055_CHIP_ID));
    i2c.done();
}

#[test]
fn modes_are_written_and_decoded() {
    let expectations = [
        write(Register::OPR_MODE, 0x0C),
        read(Register::OPR_MODE, &[0x0C]),
        read(Register::OPR_MODE, &[0x0F]),
        write(Register::PWR_MODE, 0x01),
        read(Register::PWR_MODE, &[0x02]),
        read(Register::PWR_MODE, &[0x07]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.write_mode(OperatingMode::Ndof), Ok(()));
    assert_eq!(bno.read_mode(), Ok(OperatingMode::Ndof));
    assert_eq!(bno.read_mode(), Err(Error::InvalidMode(0x0F)));
    assert_eq!(bno.write_power_mode(PowerMode::LowPower), Ok(()));
    assert_eq!(bno.read_power_mode(), Ok(PowerMode::Suspend));
    assert_eq!(bno.read_power_mode(), Err(Error::InvalidPowerMode(0x07)));
    i2c.done();
}

#[test]
fn revisions_are_read() {
    let expectations = [
        read(Register::SW_REV_ID_LSB, &[0x11, 0x03]),
        read(Register::BL_REV_ID, &[0x15]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.read_sw_revision(), Ok(0x0311));
    assert_eq!(bno.read_bootloader_revision(), Ok(0x15));
    i2c.done();
}

#[test]
fn update_unit_selection_is_read_modify_write() {
    let expectations = [
        read(Register::UNIT_SEL, &[0b1000_0110]),
        write(Register::UNIT_SEL, 0b1000_0111),
        read(Register::UNIT_SEL, &[0b0110_1000]),
        write(Register::UNIT_SEL, 0b0111_1000),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.update_unit_selection(AccelUnit::MilliG), Ok(()));
    // Reserved bits read from the device are written back unchanged.
    assert_eq!(bno.update_unit_selection(UnitField::Temperature(TemperatureUnit::Fahrenheit)), Ok(()));
    i2c.done();
}

#[test]
fn sensor_offsets_round_trip_through_the_device() {
    let profile = [
        0x01, 0x00, 0xFF, 0xFF, 0x02, 0x00,
        0x10, 0x00, 0x20, 0x00, 0x30, 0x00,
        0xFE, 0xFF, 0x00, 0x00, 0x01, 0x00,
        0xE8, 0x03, 0x00, 0x02,
    ];
    let mut expected_write = vec![Register::ACC_OFFSET_X_LSB.addr()];
    expected_write.extend_from_slice(&profile);

    let expectations = [
        read(Register::ACC_OFFSET_X_LSB, &profile),
        read(Register::OPR_MODE, &[0x00]),
        I2cTransaction::write(ADDR, expected_write),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    let offsets = bno.read_sensor_offsets().unwrap();
    assert_eq!(offsets.accel, [1, -1, 2]);
    assert_eq!(offsets.mag, [16, 32, 48]);
    assert_eq!(offsets.gyro, [-2, 0, 1]);
    assert_eq!(offsets.accel_radius, 1000);
    assert_eq!(offsets.mag_radius, 512);

    assert_eq!(bno.write_sensor_offsets(&offsets), Ok(()));
    i2c.done();
}

#[test]
fn sensor_offsets_are_not_written_outside_config_mode() {
    let expectations = [read(Register::OPR_MODE, &[0x0C])];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(
        bno.write_sensor_offsets(&SensorOffsets::default()),
        Err(Error::NotInConfigMode(OperatingMode::Ndof))
    );
    i2c.done();
}

#[test]
fn long_blocks_are_split_into_chunks() {
    let data: Vec<u8> = (0..40).collect();
    let mut first = vec![Register::ACC_DATA_X_LSB.addr()];
    first.extend_from_slice(&data[..32]);
    // The second chunk continues at the address right after the first one.
    let mut second = vec![Register::ACC_DATA_X_LSB.addr() + 32];
    second.extend_from_slice(&data[32..]);

    let expectations = [I2cTransaction::write(ADDR, first), I2cTransaction::write(ADDR, second)];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.write_block(Register::ACC_DATA_X_LSB, &data), Ok(()));
    i2c.done();
}

#[test]
fn failed_chunk_stops_the_block_write() {
    let data = [0xAA; 33];
    let mut first = vec![Register::ACC_DATA_X_LSB.addr()];
    first.extend_from_slice(&data[..32]);

    let expectations = [I2cTransaction::write(ADDR, first).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(bno.write_block(Register::ACC_DATA_X_LSB, &data), Err(Error::Transport(ErrorKind::Other)));
    i2c.done();
}

#[test]
fn largest_i16_block_fits_the_read_buffer() {
    let profile: Vec<u8> = (1..=11i16).flat_map(|value| value.to_le_bytes()).collect();
    let expectations = [read(Register::ACC_OFFSET_X_LSB, &profile)];
    let mut i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new(i2c.clone(), NoopDelay::new());

    assert_eq!(
        bno.read_i16s::<11>(Register::ACC_OFFSET_X_LSB),
        Ok([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
    );
    i2c.done();
}

#[test]
fn release_hands_back_the_bus() {
    let expectations = [read(Register::CHIP_ID, &[BNO055_CHIP_ID])];
    let i2c = I2cMock::new(&expectations);
    let mut bno = Bno055::new_with_address(i2c, NoopDelay::new(), DeviceAddress::Default);

    assert_eq!(bno.read_chip_id(), Ok(BNO055_CHIP_ID));
    let mut i2c = bno.release();
    i2c.done();
}
