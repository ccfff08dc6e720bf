//! Computers: a trait that knows nothing about its implementors, and an
//! enum for when the caller does need to tell them apart.

pub trait ComputerManager {
    /// Whether the machine can be turned on, i.e. it is not on already.
    fn turn_on(&self) -> bool;
    /// Whether the machine can be turned off, i.e. it is not off already.
    fn turn_off(&self) -> bool;
    fn os(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinuxComputer {
    pub is_on: bool,
    pub is_off: bool,
    pub architecture: String,
    pub os_name: String,
    pub years_of_use: u32,
}

impl ComputerManager for LinuxComputer {
    fn turn_on(&self) -> bool {
        !self.is_on
    }

    fn turn_off(&self) -> bool {
        !self.is_off
    }

    fn os(&self) -> &str {
        &self.os_name
    }
}

/// Built on the same hardware description as a Linux machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacComputer {
    base: LinuxComputer,
}

impl MacComputer {
    pub fn new(base: LinuxComputer) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &LinuxComputer {
        &self.base
    }

    pub fn architecture(&self) -> &str {
        &self.base.architecture
    }

    pub fn years_of_use(&self) -> u32 {
        self.base.years_of_use
    }
}

impl ComputerManager for MacComputer {
    fn turn_on(&self) -> bool {
        self.base.turn_on()
    }

    fn turn_off(&self) -> bool {
        self.base.turn_off()
    }

    fn os(&self) -> &str {
        self.base.os()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Computer {
    Linux(LinuxComputer),
    Mac(MacComputer),
}

impl ComputerManager for Computer {
    fn turn_on(&self) -> bool {
        match self {
            Computer::Linux(linux) => linux.turn_on(),
            Computer::Mac(mac) => mac.turn_on(),
        }
    }

    fn turn_off(&self) -> bool {
        match self {
            Computer::Linux(linux) => linux.turn_off(),
            Computer::Mac(mac) => mac.turn_off(),
        }
    }

    fn os(&self) -> &str {
        match self {
            Computer::Linux(linux) => linux.os(),
            Computer::Mac(mac) => mac.os(),
        }
    }
}

pub fn describe(computer: &Computer) -> String {
    format!("we have a {} computer", computer.os())
}
