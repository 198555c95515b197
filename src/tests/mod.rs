mod pool_tests;

use crate::exec::{command_line, ToolOutput, ToolRunner};
use std::cell::RefCell;
use std::collections::HashMap;

/// Canned tool outputs keyed by full command line. Unknown commands fail
/// with empty stdout unless `succeed_unknown` is set.
#[derive(Default)]
pub(crate) struct FakeRunner {
    outputs:         HashMap<String, ToolOutput>,
    succeed_unknown: bool,
    calls:           RefCell<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self { Self::default() }

    pub(crate) fn with(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), ToolOutput { stdout: stdout.to_string(), success: true });
        self
    }

    pub(crate) fn failing(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), ToolOutput { stdout: stdout.to_string(), success: false });
        self
    }

    pub(crate) fn succeed_unknown(mut self) -> Self {
        self.succeed_unknown = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> { self.calls.borrow().clone() }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> ToolOutput {
        let cmd = command_line(program, args);
        self.calls.borrow_mut().push(cmd.clone());
        match self.outputs.get(&cmd) {
            Some(out) => out.clone(),
            None      => ToolOutput { stdout: String::new(), success: self.succeed_unknown },
        }
    }
}

pub(crate) const GLABEL_STATUS: &str = "\
                                      Name  Status  Components
gptid/2a1c3d5e-1111-11ee-9c2b-0cc47a123456     N/A  da0p2
gptid/3b2d4e6f-2222-11ee-9c2b-0cc47a123456     N/A  da1p2
                             diskid/DISK-Z1X2  N/A  ada0
";

pub(crate) fn smart_ata(serial: &str, model: &str) -> String {
    format!(
        "smartctl 7.3 2022-02-28 r5338 [FreeBSD 13.1-RELEASE amd64] (local build)\n\
         Copyright (C) 2002-22, Bruce Allen, Christian Franke, www.smartmontools.org\n\
         \n\
         === START OF INFORMATION SECTION ===\n\
         Model Family:     Western Digital Red\n\
         Device Model:     {model}\n\
         Serial Number:    {serial}\n\
         LU WWN Device Id: 5 0014ee 2b5e0c0a1\n\
         Firmware Version: 82.00A82\n\
         User Capacity:    4,000,787,030,016 bytes [4.00 TB]\n"
    )
}

/// One `storcli show all` drive block.
pub(crate) fn storcli_block(c: u32, e: u32, s: u32, serial: &str, model: &str) -> String {
    format!(
        "Drive /c{c}/e{e}/s{s} :\n\
         ================\n\
         \n\
         -------------------------------------------------------------------------\n\
         EID:Slt DID State DG     Size Intf Med SED PI SeSz Model               Sp\n\
         -------------------------------------------------------------------------\n\
         {e}:{s}     7 JBOD  -  3.637 TB SATA HDD N   N  512B {model}   U\n\
         -------------------------------------------------------------------------\n\
         \n\
         Drive /c{c}/e{e}/s{s} - Detailed Information :\n\
         ========================================\n\
         \n\
         Drive /c{c}/e{e}/s{s} State :\n\
         ======================\n\
         Shield Counter = 0\n\
         Media Error Count = 0\n\
         \n\
         Drive /c{c}/e{e}/s{s} Device attributes :\n\
         ===================================\n\
         SN = {serial}\n\
         Manufacturer Id = ATA     \n\
         Model Number = {model}\n\
         NAND Vendor = NA\n\
         WWN = 50014EE2B5E0C0A1\n\
         Firmware Revision = 82.00A82\n\
         Inquiry Data = \n\
         40 00 ff 3f 37 c8 10 00 00 00 00 00 3f 00 00 00\n\
         \n"
    )
}

/// `zpool list -PLvH` device row with the health in field 10.
pub(crate) fn zpool_device(path: &str, health: &str) -> String {
    format!("\t{path}\t3.64T\t-\t-\t-\t-\t-\t-\t-\t{health}\t-\n")
}

pub(crate) fn zpool_output(devices: &[(&str, &str)]) -> String {
    let mut s = String::from("tank\t7.25T\t1.20T\t6.05T\t-\t-\t3%\t16%\t1.00x\tDEGRADED\t-\n");
    s.push_str("\tmirror-0\t3.62T\t600G\t3.03T\t-\t-\t3%\t16.2%\t-\tDEGRADED\t-\n");
    for (path, health) in devices {
        s.push_str(&zpool_device(path, health));
    }
    s
}
