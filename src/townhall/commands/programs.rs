use crate::catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProgramKind;

pub fn run(kind: ProgramKind) -> Result<CmdResult> {
    Ok(CmdResult::default().with_program(catalog::program(kind)))
}
