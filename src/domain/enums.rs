// Copyright (c) 2025 - Cowboy AI, Inc.
//! Redfish Enumerations
//!
//! Keywords follow the DMTF Redfish schema literals exactly.

use super::keyword::protocol_enum;

protocol_enum! {
    /// Boot source override target (`Boot.BootSourceOverrideTarget`)
    pub enum BootSource in boot_source {
        None => ("None", "Boot from the normal boot device"),
        Pxe => ("Pxe", "Boot from the Pre-Boot EXecution (PXE) environment"),
        Floppy => ("Floppy", "Boot from the floppy disk drive"),
        Cd => ("Cd", "Boot from the CD or DVD"),
        Usb => ("Usb", "Boot from a system BIOS-specified USB device"),
        Hdd => ("Hdd", "Boot from a hard drive"),
        BiosSetup => ("BiosSetup", "Boot to the BIOS setup utility"),
        Utilities => ("Utilities", "Boot to the manufacturer's utilities program or programs"),
        Diags => ("Diags", "Boot to the manufacturer's diagnostics program"),
        UefiShell => ("UefiShell", "Boot to the UEFI Shell"),
        UefiTarget => ("UefiTarget", "Boot to the UEFI device specified in UefiTargetBootSourceOverride"),
        SdCard => ("SDCard", "Boot from an SD card"),
        UefiHttp => ("UefiHttp", "Boot from a UEFI HTTP network location"),
        RemoteDrive => ("RemoteDrive", "Boot from a remote drive, such as an iSCSI target"),
        UefiBootNext => ("UefiBootNext", "Boot to the UEFI device that the BootNext property specifies"),
    }
}

protocol_enum! {
    /// Power state of a chassis or computer system (`PowerState`)
    pub enum PowerState in power_state {
        On => ("On", "The resource is powered on"),
        Off => ("Off", "The resource is powered off"),
        PoweringOn => ("PoweringOn", "A temporary state between off and on"),
        PoweringOff => ("PoweringOff", "A temporary state between on and off"),
        Paused => ("Paused", "The resource is paused"),
    }
}

protocol_enum! {
    /// Kind of computer system (`SystemType`)
    pub enum SystemType in system_type {
        Physical => ("Physical", "A physical computer system"),
        Virtual => ("Virtual", "A virtual machine instance"),
        Os => ("OS", "An operating system instance"),
        PhysicallyPartitioned => ("PhysicallyPartitioned", "A hardware-based partition of a computer system"),
        VirtuallyPartitioned => ("VirtuallyPartitioned", "A virtual or software-based partition of a computer system"),
        Composed => ("Composed", "A computer system constructed by binding resource blocks together"),
        Dpu => ("DPU", "A computer system that performs the functions of a data processing unit"),
    }
}

protocol_enum! {
    /// Whether a boot source override applies (`Boot.BootSourceOverrideEnabled`)
    pub enum BootSourceOverrideEnabled in boot_source_override_enabled {
        Disabled => ("Disabled", "The system boots normally"),
        Once => ("Once", "On its next boot cycle, the system boots one time to the override target"),
        Continuous => ("Continuous", "The system boots to the override target until this property is Disabled"),
    }
}

protocol_enum! {
    /// Action taken when a power limit is exceeded (`PowerLimit.LimitException`)
    pub enum PowerLimitException in power_limit_exception {
        NoAction => ("NoAction", "Take no action when the limit is exceeded"),
        HardPowerOff => ("HardPowerOff", "Turn the power off immediately when the limit is exceeded"),
        LogEventOnly => ("LogEventOnly", "Log an event when the limit is exceeded, but take no further action"),
        Oem => ("Oem", "Take an OEM-defined action"),
    }
}
