use crate::catalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn officials() -> Result<CmdResult> {
    Ok(CmdResult::default().with_officials(catalog::officials()))
}

pub fn departments() -> Result<CmdResult> {
    Ok(CmdResult::default().with_departments(catalog::departments()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mayor_heads_both_lists() {
        let officials = officials().unwrap().officials;
        let departments = departments().unwrap().departments;
        assert_eq!(officials[0].position, "City Mayor");
        assert_eq!(departments[0].head, officials[0].name);
    }
}
