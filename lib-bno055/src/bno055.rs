use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::{
    registers::Register, utils::*, CalibrationStatus, DeviceAddress, Error, EulerAngles,
    OperatingMode, PowerMode, Quaternion, SelftestResult, SensorOffsets, SysTrigger, SystemError,
    SystemReport, SystemStatus, UnitField, UnitSelection, Vector, BNO055_CHIP_ID,
    CALIBRATION_POLL_INTERVAL_MS, SENSOR_OFFSETS_SIZE, TRIGGER_POLL_INTERVAL_MS,
};

/// Magnetometer sensitivity, 1 µT = 16 LSB. There is no unit selection for the magnetometer.
pub const MAG_SCALE_FACTOR: f32 = 16.0;

/// Quaternion sensitivity, 1 (unitless) = 2^14 LSB.
pub const QUATERNION_SCALE_FACTOR: f32 = (1u32 << 14) as f32;

/// Time the device needs to switch between config mode and any other operating mode
/// (datasheet table 3-6, 19 ms is the slower of both directions).
pub const MODE_SWITCH_DELAY_MS: u32 = 19;

/// Largest block [`Bno055::write_block`] sends in a single bus transaction.
const BLOCK_CHUNK_SIZE: usize = 32;

pub struct Bno055<I2C, D>
{
    /// i2c channel that we actually use to communicate with the BNO055 chip.
    i2c: I2C,

    /// i2c address that chip is located at.
    address: u8,

    /// Delay source used for polling and mode switches.
    delay: D,
}

impl<I2C, D, E> Bno055<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Create a new BNO055 instance at the default address (COM3 pin low).
    ///
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::new_with_address(i2c, delay, DeviceAddress::Default)
    }

    pub fn new_with_address(i2c: I2C, delay: D, address: DeviceAddress) -> Self {
        Bno055 {
            i2c,
            address: address.into(),
            delay,
        }
    }

    /// Give back the I2C interface.
    ///
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    // Register access
    // ============================================================================================

    /// Writes a single byte into the given register (datasheet section 4.6, figure 6).
    ///
    pub fn write_byte(&mut self, register: Register, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[register.addr(), value])
            .map_err(Error::Transport)
    }

    /// Reads a single byte from the given register (datasheet section 4.6, figure 7).
    ///
    pub fn read_byte(&mut self, register: Register) -> Result<u8, Error<E>> {
        let mut state = [0u8];
        self.read_block(register, &mut state)?;
        Ok(state[0])
    }

    /// Fills `buffer` with the contents of `register` and the registers following it, in
    /// ascending address order.
    ///
    pub fn read_block(&mut self, register: Register, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[register.addr()], buffer)
            .map_err(Error::Transport)
    }

    /// Writes `data` into `register` and the registers following it. The device auto increments
    /// the register address, larger blocks are split into several transactions.
    ///
    pub fn write_block(&mut self, register: Register, data: &[u8]) -> Result<(), Error<E>> {
        let mut chunk = [0u8; BLOCK_CHUNK_SIZE + 1];
        let mut written: usize = 0;
        while written < data.len() {
            let chunk_size = usize::min(BLOCK_CHUNK_SIZE, data.len() - written);
            chunk[0] = register.addr().wrapping_add(written as u8);
            chunk[1..=chunk_size].copy_from_slice(&data[written..written + chunk_size]);
            self.i2c
                .write(self.address, &chunk[..=chunk_size])
                .map_err(Error::Transport)?;
            written += chunk_size;
        }
        Ok(())
    }

    /// Reads `N` consecutive little endian i16 values starting at `register` (which should be
    /// an `_LSB` register).
    ///
    pub(crate) fn read_i16s<const N: usize>(&mut self, register: Register) -> Result<[i16; N], Error<E>> {
        // Largest block on page 0 is the 11 value calibration profile.
        const { assert!(N * 2 <= SENSOR_OFFSETS_SIZE) };
        let mut buffer = [0u8; SENSOR_OFFSETS_SIZE];
        self.read_block(register, &mut buffer[..N * 2])?;
        Ok(decode_i16s(&buffer[..N * 2]))
    }

    // Identity & lifecycle
    // ============================================================================================

    /// Gets the contents of the `CHIP_ID` register, [`BNO055_CHIP_ID`] for a working device.
    ///
    pub fn read_chip_id(&mut self) -> Result<u8, Error<E>> {
        self.read_byte(Register::CHIP_ID)
    }

    /// Reads the firmware revision of the on chip microcontroller.
    ///
    pub fn read_sw_revision(&mut self) -> Result<u16, Error<E>> {
        let mut data = [0u8; 2];
        self.read_block(Register::SW_REV_ID_LSB, &mut data)?;
        Ok(u16::from_le_bytes(data))
    }

    pub fn read_bootloader_revision(&mut self) -> Result<u8, Error<E>> {
        self.read_byte(Register::BL_REV_ID)
    }

    fn verify_identity(&mut self) -> Result<(), Error<E>> {
        let id = self.read_chip_id()?;
        if id != BNO055_CHIP_ID {
            log::warn!("Unexpected chip id {:#04x} at address {:#04x}", id, self.address);
            return Err(Error::IdentityMismatch(id));
        }
        Ok(())
    }

    /// Checks that a BNO055 answers at the configured address and puts it into config mode.
    ///
    /// The identity is checked a second time after the mode switch since the device may not
    /// respond for a short while after certain writes.
    ///
    pub fn begin(&mut self) -> Result<(), Error<E>> {
        self.verify_identity()?;
        self.write_mode(OperatingMode::Config)?;
        self.verify_identity()?;
        log::info!("BNO055 ready at address {:#04x}", self.address);
        Ok(())
    }

    /// Switches the operating mode (datasheet section 3.3) and waits for the switch to complete.
    ///
    pub fn write_mode(&mut self, mode: OperatingMode) -> Result<(), Error<E>> {
        log::info!("Setting operating mode={:?}", mode);
        self.write_byte(Register::OPR_MODE, mode.as_register())?;
        self.delay.delay_ms(MODE_SWITCH_DELAY_MS);
        Ok(())
    }

    pub fn read_mode(&mut self) -> Result<OperatingMode, Error<E>> {
        let value = self.read_byte(Register::OPR_MODE)?;
        OperatingMode::try_from(value).map_err(Error::InvalidMode)
    }

    /// Sets the power mode (datasheet section 3.2).
    ///
    pub fn write_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<E>> {
        log::info!("Setting power mode={:?}", mode);
        self.write_byte(Register::PWR_MODE, mode.as_register())
    }

    pub fn read_power_mode(&mut self) -> Result<PowerMode, Error<E>> {
        let value = self.read_byte(Register::PWR_MODE)?;
        PowerMode::try_from(value).map_err(Error::InvalidPowerMode)
    }

    // System trigger
    // ============================================================================================

    /// Sets the given bits in `SYS_TRIGGER` and blocks until the device answers with its chip id
    /// again, after which the register is cleared.
    ///
    /// While the device reboots the bus may NACK, these errors are ignored and the chip id is
    /// polled again every [`TRIGGER_POLL_INTERVAL_MS`]. This never gives up, use
    /// [`Self::system_trigger_within`] when the device may be gone for good.
    ///
    pub fn system_trigger(&mut self, trigger: SysTrigger) -> Result<(), Error<E>> {
        self.trigger_and_confirm(trigger, None)
    }

    /// Same as [`Self::system_trigger`] but gives up with [`Error::TriggerTimeout`] once the
    /// device has not come back after `timeout_ms` worth of poll delays. The total delay never
    /// exceeds `timeout_ms`, the last poll happens at the deadline. The trigger register is left
    /// as is on timeout.
    ///
    pub fn system_trigger_within(&mut self, trigger: SysTrigger, timeout_ms: u32) -> Result<(), Error<E>> {
        self.trigger_and_confirm(trigger, Some(timeout_ms))
    }

    fn trigger_and_confirm(&mut self, trigger: SysTrigger, timeout_ms: Option<u32>) -> Result<(), Error<E>> {
        log::info!("Issuing system trigger={:?}", trigger);
        self.write_byte(Register::SYS_TRIGGER, trigger.as_register())?;

        let mut attempts: u32 = 1;
        let mut waited_ms: u32 = 0;
        while !self.identity_confirmed() {
            // The last pause is shortened so the final poll lands exactly on the deadline.
            let pause_ms = match timeout_ms {
                None => TRIGGER_POLL_INTERVAL_MS,
                Some(timeout) if waited_ms >= timeout => {
                    log::warn!("BNO055 did not come back after {} attempts", attempts);
                    return Err(Error::TriggerTimeout);
                }
                Some(timeout) => u32::min(TRIGGER_POLL_INTERVAL_MS, timeout - waited_ms),
            };
            self.delay.delay_ms(pause_ms);
            waited_ms = waited_ms.saturating_add(pause_ms);
            attempts += 1;
        }

        log::info!("System trigger confirmed after {} attempts", attempts);
        self.write_byte(Register::SYS_TRIGGER, SysTrigger::NO_TRIGGER.as_register())
    }

    fn identity_confirmed(&mut self) -> bool {
        match self.read_chip_id() {
            Ok(BNO055_CHIP_ID) => true,
            Ok(id) => {
                log::debug!("Waiting for BNO055, chip id reads {:#04x}", id);
                false
            }
            // The device is rebooting, NACKs are expected here.
            Err(_) => {
                log::debug!("Waiting for BNO055, bus not responding");
                false
            }
        }
    }

    // Status
    // ============================================================================================

    /// Gets the calibration counters of all subsystems (datasheet section 3.10, 4.3.54).
    ///
    pub fn read_calibration_status(&mut self) -> Result<CalibrationStatus, Error<E>> {
        Ok(CalibrationStatus::from_register(self.read_byte(Register::CALIB_STAT)?))
    }

    /// Polls `CALIB_STAT` every [`CALIBRATION_POLL_INTERVAL_MS`] until every subsystem reports
    /// full calibration, or fails with [`Error::CalibrationTimeout`] after `max_polls` polls.
    ///
    pub fn wait_until_calibrated(&mut self, max_polls: u32) -> Result<CalibrationStatus, Error<E>> {
        for poll in 1..=max_polls {
            let status = self.read_calibration_status()?;
            log::debug!("Calibration status: {:?}", status);
            if status.is_fully_calibrated() {
                log::info!("BNO055 fully calibrated after {} polls", poll);
                return Ok(status);
            }
            if poll < max_polls {
                self.delay.delay_ms(CALIBRATION_POLL_INTERVAL_MS);
            }
        }
        Err(Error::CalibrationTimeout)
    }

    /// Gets the result of the last self test (datasheet section 3.8, 4.3.55).
    ///
    pub fn selftest_result(&mut self) -> Result<SelftestResult, Error<E>> {
        Ok(SelftestResult::from_register(self.read_byte(Register::ST_RESULT)?))
    }

    pub fn read_system_status(&mut self) -> Result<SystemStatus, Error<E>> {
        Ok(SystemStatus::from_register(self.read_byte(Register::SYS_STATUS)?))
    }

    pub fn read_system_error(&mut self) -> Result<SystemError, Error<E>> {
        Ok(SystemError::from_register(self.read_byte(Register::SYS_ERR)?))
    }

    /// Reads the system status, and only if the system is in error also the error code (and the
    /// self test result when the error is a failed self test).
    ///
    pub fn system_report(&mut self) -> Result<SystemReport, Error<E>> {
        let status = self.read_system_status()?;
        let mut report = SystemReport { status, error: None, selftest: None };
        if status == SystemStatus::SystemError {
            let error = self.read_system_error()?;
            report.error = Some(error);
            if error == SystemError::SelftestFailed {
                report.selftest = Some(self.selftest_result()?);
            }
        }
        Ok(report)
    }

    // Unit selection
    // ============================================================================================

    /// Reads the current unit configuration (datasheet section 3.6.1).
    ///
    pub fn read_unit_selection(&mut self) -> Result<UnitSelection, Error<E>> {
        Ok(UnitSelection::from_register(self.read_byte(Register::UNIT_SEL)?))
    }

    pub fn write_unit_selection(&mut self, units: UnitSelection) -> Result<(), Error<E>> {
        self.write_byte(Register::UNIT_SEL, units.as_register())
    }

    /// Changes a single unit family on the device while keeping the other families (and the
    /// reserved bits) as the device currently has them.
    ///
    pub fn update_unit_selection(&mut self, field: impl Into<UnitField>) -> Result<(), Error<E>> {
        let field = field.into();
        let units = self.read_unit_selection()?;
        log::debug!("Updating unit selection {:?} -> {:?}", units.field_like(field), field);
        self.write_unit_selection(units.with(field))
    }

    // Raw data
    // ============================================================================================

    pub fn read_raw_accel(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::ACC_DATA_X_LSB)
    }

    pub fn read_raw_mag(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::MAG_DATA_X_LSB)
    }

    pub fn read_raw_gyro(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::GYR_DATA_X_LSB)
    }

    /// Raw (heading, roll, pitch).
    pub fn read_raw_euler(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::EUL_HEADING_LSB)
    }

    /// Raw (w, x, y, z).
    pub fn read_raw_quaternion(&mut self) -> Result<[i16; 4], Error<E>> {
        self.read_i16s(Register::QUA_DATA_W_LSB)
    }

    pub fn read_raw_linear_accel(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::LIA_DATA_X_LSB)
    }

    pub fn read_raw_gravity(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_i16s(Register::GRV_DATA_X_LSB)
    }

    pub fn read_raw_temperature(&mut self) -> Result<i8, Error<E>> {
        Ok(decode_i8(self.read_byte(Register::TEMP)?))
    }

    // Scaled data
    // ============================================================================================

    /// Get the current accelerometer values in m/s^2 or mg, depending on the unit selection.
    ///
    pub fn read_accelerometer(&mut self) -> Result<Vector, Error<E>> {
        let raw = self.read_raw_accel()?;
        let units = self.read_unit_selection()?;
        Ok(Vector::from(scale(raw, units.acceleration.as_scale_factor())))
    }

    /// Get the current magnetometer values in µT.
    ///
    pub fn read_magnetometer(&mut self) -> Result<Vector, Error<E>> {
        let raw = self.read_raw_mag()?;
        Ok(Vector::from(scale(raw, MAG_SCALE_FACTOR)))
    }

    /// Get the current gyroscope values in deg/s or rad/s, depending on the unit selection.
    ///
    pub fn read_gyroscope(&mut self) -> Result<Vector, Error<E>> {
        let raw = self.read_raw_gyro()?;
        let units = self.read_unit_selection()?;
        Ok(Vector::from(scale(raw, units.angular_rate.as_scale_factor())))
    }

    /// Get the fused orientation in degrees or radians, depending on the unit selection. Only
    /// meaningful in a fusion mode.
    ///
    pub fn read_euler(&mut self) -> Result<EulerAngles, Error<E>> {
        let raw = self.read_raw_euler()?;
        let units = self.read_unit_selection()?;
        let [heading, roll, pitch] = scale(raw, units.euler.as_scale_factor());
        Ok(EulerAngles::new(heading, roll, pitch))
    }

    /// Get the fused orientation as a quaternion. Only meaningful in a fusion mode.
    ///
    pub fn read_quaternion(&mut self) -> Result<Quaternion, Error<E>> {
        let raw = self.read_raw_quaternion()?;
        Ok(Quaternion::from(scale(raw, QUATERNION_SCALE_FACTOR)))
    }

    /// Get the acceleration without gravity in m/s^2 or mg. Only meaningful in a fusion mode.
    ///
    pub fn read_linear_accel(&mut self) -> Result<Vector, Error<E>> {
        let raw = self.read_raw_linear_accel()?;
        let units = self.read_unit_selection()?;
        Ok(Vector::from(scale(raw, units.acceleration.as_scale_factor())))
    }

    /// Get the gravity vector in m/s^2 or mg. Only meaningful in a fusion mode.
    ///
    pub fn read_gravity(&mut self) -> Result<Vector, Error<E>> {
        let raw = self.read_raw_gravity()?;
        let units = self.read_unit_selection()?;
        Ok(Vector::from(scale(raw, units.acceleration.as_scale_factor())))
    }

    /// Get the chip temperature in degrees Celsius or Fahrenheit, depending on the unit
    /// selection.
    ///
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        let raw = self.read_raw_temperature()?;
        let units = self.read_unit_selection()?;
        Ok(raw as f32 / units.temperature.as_scale_factor())
    }

    // Calibration profile
    // ============================================================================================

    /// Reads the offset and radius registers (datasheet section 3.6.4).
    ///
    pub fn read_sensor_offsets(&mut self) -> Result<SensorOffsets, Error<E>> {
        let mut data = [0u8; SENSOR_OFFSETS_SIZE];
        self.read_block(Register::ACC_OFFSET_X_LSB, &mut data)?;
        Ok(SensorOffsets::from_bytes(&data))
    }

    /// Restores a previously read calibration profile. The device ignores these writes outside
    /// of config mode, so the current mode is checked first.
    ///
    pub fn write_sensor_offsets(&mut self, offsets: &SensorOffsets) -> Result<(), Error<E>> {
        let mode = self.read_mode()?;
        if mode != OperatingMode::Config {
            return Err(Error::NotInConfigMode(mode));
        }
        log::debug!("Writing sensor offsets {:?}", offsets);
        self.write_block(Register::ACC_OFFSET_X_LSB, &offsets.as_bytes())
    }
}
