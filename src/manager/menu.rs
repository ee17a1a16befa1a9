//! Interactive menu loop
//!
//! Reads one numeric selection per iteration from a line-oriented input
//! stream, dispatches it against the active area, and writes the resulting
//! confirmation or error text to the output stream. Malformed input is
//! reported and re-prompted, never fatal; the loop ends on the exit
//! selection or end-of-input.

use crate::manager::AreaManager;
use crate::types::AreaKind;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// An operation selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Make the other area active
    SwitchArea,
    /// Admit occupants into the active area
    AddOccupants,
    /// Release occupants from the active area
    RemoveOccupants,
    /// Switch one of the active area's lights on
    SwitchLightOn,
    /// Switch one of the active area's lights off
    SwitchLightOff,
    /// Print the active area's status report
    DisplayStatus,
    /// Print the active area's information report
    DisplayAreaInfo,
    /// Gym: toggle air conditioning; pool: toggle lifeguard presence
    ToggleSetting,
    /// Gym: set the thermostat; pool: adjust the water temperature
    AdjustTemperature,
    /// Leave the menu
    Exit,
}

impl MenuAction {
    /// Map a numeric selection to an action, `None` if out of range
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(MenuAction::SwitchArea),
            2 => Some(MenuAction::AddOccupants),
            3 => Some(MenuAction::RemoveOccupants),
            4 => Some(MenuAction::SwitchLightOn),
            5 => Some(MenuAction::SwitchLightOff),
            6 => Some(MenuAction::DisplayStatus),
            7 => Some(MenuAction::DisplayAreaInfo),
            8 => Some(MenuAction::ToggleSetting),
            9 => Some(MenuAction::AdjustTemperature),
            0 => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// Result of prompting the user for a value
enum Prompt<T> {
    /// A well-formed value was read
    Value(T),
    /// The line did not parse; the user was told
    Invalid,
    /// The input stream ended
    Eof,
}

/// The interactive menu over a line-oriented reader and a writer
///
/// Generic over the streams so scripted sessions can drive it in tests.
#[derive(Debug)]
pub struct Menu<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu over the given input and output streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run the menu loop until the exit selection or end-of-input
    pub fn run(&mut self, manager: &mut AreaManager) -> io::Result<()> {
        self.print_welcome()?;

        loop {
            self.print_menu(manager)?;

            let selection = match self.prompt_integer("Enter your choice: ")? {
                Prompt::Value(n) => n,
                Prompt::Invalid => continue,
                Prompt::Eof => break,
            };

            let action = match MenuAction::from_selection(selection) {
                Some(action) => action,
                None => {
                    writeln!(
                        self.writer,
                        "ERROR: {} is not a menu option. Please choose 0-9.",
                        selection
                    )?;
                    continue;
                }
            };

            debug!(?action, area = %manager.active_kind(), "menu action selected");

            if action == MenuAction::Exit {
                writeln!(self.writer, "Goodbye!")?;
                break;
            }

            match self.dispatch(action, manager)? {
                ControlFlow::Continue => {}
                ControlFlow::EndOfInput => break,
            }
        }

        Ok(())
    }

    /// Dispatch one action against the manager, prompting for arguments
    fn dispatch(
        &mut self,
        action: MenuAction,
        manager: &mut AreaManager,
    ) -> io::Result<ControlFlow> {
        match action {
            MenuAction::SwitchArea => {
                let msg = manager.switch_active_area();
                writeln!(self.writer, "{}", msg)?;
            }
            MenuAction::AddOccupants => {
                match self.prompt_integer("Enter number of occupants to add: ")? {
                    Prompt::Value(count) => {
                        self.report(manager.active_area_mut().add_occupants(count))?;
                    }
                    Prompt::Invalid => {}
                    Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                }
            }
            MenuAction::RemoveOccupants => {
                match self.prompt_integer("Enter number of occupants to remove: ")? {
                    Prompt::Value(count) => {
                        self.report(manager.active_area_mut().remove_occupants(count))?;
                    }
                    Prompt::Invalid => {}
                    Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                }
            }
            MenuAction::SwitchLightOn => {
                match self.prompt_integer("Enter light number (1-3): ")? {
                    Prompt::Value(n) => {
                        self.report(manager.active_area_mut().switch_light_on(n))?;
                    }
                    Prompt::Invalid => {}
                    Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                }
            }
            MenuAction::SwitchLightOff => {
                match self.prompt_integer("Enter light number (1-3): ")? {
                    Prompt::Value(n) => {
                        self.report(manager.active_area_mut().switch_light_off(n))?;
                    }
                    Prompt::Invalid => {}
                    Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                }
            }
            MenuAction::DisplayStatus => {
                let report = manager.active_area().status_report();
                writeln!(self.writer, "{}", report)?;
            }
            MenuAction::DisplayAreaInfo => {
                let info = manager.active_area().area_info();
                writeln!(self.writer, "{}", info)?;
            }
            MenuAction::ToggleSetting => {
                let msg = match manager.active_kind() {
                    AreaKind::Gym => manager.gym_mut().toggle_air_conditioning(),
                    AreaKind::SwimmingPool => manager.pool_mut().toggle_lifeguard(),
                };
                writeln!(self.writer, "{}", msg)?;
            }
            MenuAction::AdjustTemperature => match manager.active_kind() {
                AreaKind::Gym => match self.prompt_integer("Enter temperature (16-30 °C): ")? {
                    Prompt::Value(temp) => {
                        let temp = temp.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                        self.report(manager.gym_mut().set_temperature(temp))?;
                    }
                    Prompt::Invalid => {}
                    Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                },
                AreaKind::SwimmingPool => {
                    match self.prompt_decimal("Enter water temperature (20.0-35.0 °C): ")? {
                        Prompt::Value(temp) => {
                            self.report(manager.pool_mut().adjust_water_temperature(temp))?;
                        }
                        Prompt::Invalid => {}
                        Prompt::Eof => return Ok(ControlFlow::EndOfInput),
                    }
                }
            },
            MenuAction::Exit => unreachable!("exit is handled by the caller"),
        }

        Ok(ControlFlow::Continue)
    }

    /// Print the welcome banner
    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.writer, "========================================")?;
        writeln!(self.writer, " SPEKE APARTMENTS ACCOMMODATION MANAGER")?;
        writeln!(self.writer, "========================================")?;
        writeln!(self.writer, "Welcome! The gym area is active.")?;
        Ok(())
    }

    /// Print the numbered menu for the current active area
    fn print_menu(&mut self, manager: &AreaManager) -> io::Result<()> {
        let (toggle_label, temperature_label) = match manager.active_kind() {
            AreaKind::Gym => ("Toggle air conditioning", "Set temperature"),
            AreaKind::SwimmingPool => ("Toggle lifeguard presence", "Adjust water temperature"),
        };

        writeln!(self.writer)?;
        writeln!(self.writer, "Active area: {}", manager.active_kind().area_name())?;
        writeln!(self.writer, "  1. Switch active area")?;
        writeln!(self.writer, "  2. Add occupants")?;
        writeln!(self.writer, "  3. Remove occupants")?;
        writeln!(self.writer, "  4. Switch a light ON")?;
        writeln!(self.writer, "  5. Switch a light OFF")?;
        writeln!(self.writer, "  6. Display area status")?;
        writeln!(self.writer, "  7. Display area information")?;
        writeln!(self.writer, "  8. {}", toggle_label)?;
        writeln!(self.writer, "  9. {}", temperature_label)?;
        writeln!(self.writer, "  0. Exit")?;
        Ok(())
    }

    /// Write an operation result: the confirmation on success, the reason on
    /// rejection. State was only mutated on the success path.
    fn report(&mut self, result: Result<String, crate::area::AreaError>) -> io::Result<()> {
        match result {
            Ok(msg) => writeln!(self.writer, "{}", msg),
            Err(err) => writeln!(self.writer, "{}", err),
        }
    }

    /// Prompt for a whole number
    fn prompt_integer(&mut self, prompt: &str) -> io::Result<Prompt<i64>> {
        let line = match self.read_line(prompt)? {
            Some(line) => line,
            None => return Ok(Prompt::Eof),
        };

        match line.trim().parse::<i64>() {
            Ok(value) => Ok(Prompt::Value(value)),
            Err(_) => {
                writeln!(self.writer, "ERROR: '{}' is not a whole number.", line.trim())?;
                Ok(Prompt::Invalid)
            }
        }
    }

    /// Prompt for a decimal number
    fn prompt_decimal(&mut self, prompt: &str) -> io::Result<Prompt<f64>> {
        let line = match self.read_line(prompt)? {
            Some(line) => line,
            None => return Ok(Prompt::Eof),
        };

        match line.trim().parse::<f64>() {
            Ok(value) => Ok(Prompt::Value(value)),
            Err(_) => {
                writeln!(self.writer, "ERROR: '{}' is not a number.", line.trim())?;
                Ok(Prompt::Invalid)
            }
        }
    }

    /// Write a prompt and read one line, `None` on end-of-input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Whether the menu loop should keep going after a dispatch
#[derive(Debug, PartialEq, Eq)]
enum ControlFlow {
    /// Return to the menu prompt
    Continue,
    /// The input stream ended mid-operation
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mapping() {
        assert_eq!(MenuAction::from_selection(1), Some(MenuAction::SwitchArea));
        assert_eq!(MenuAction::from_selection(6), Some(MenuAction::DisplayStatus));
        assert_eq!(MenuAction::from_selection(0), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_selection(10), None);
        assert_eq!(MenuAction::from_selection(-1), None);
    }
}
