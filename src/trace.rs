use std::io::Write;
use std::path::Path;
use csv::Writer;

use crate::solver::StepRecord;

const HEADER: [&str; 8] = ["step", "from_x", "from_y", "sensed", "rule", "direction", "to_x", "to_y"];

pub fn write_records<W: Write>(writer: &mut Writer<W>, records: &[StepRecord]) -> csv::Result<()> {
    writer.write_record(&HEADER)?;
    for r in records {
        writer.write_record(&[
            r.step.to_string(),
            r.from.x.to_string(),
            r.from.y.to_string(),
            r.sensed.to_string(),
            r.rule.to_string(),
            format!("{:?}", r.direction),
            r.to.x.to_string(),
            r.to.y.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<P: AsRef<Path>>(path: P, records: &[StepRecord]) -> csv::Result<()> {
    let mut writer = Writer::from_path(path)?;
    write_records(&mut writer, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Direction, Pos};
    use crate::inference::Rule;

    #[test]
    fn test_records_serialize_one_line_each() {
        let records = vec![
            StepRecord {
                step: 0,
                from: Pos::new(0, 0),
                sensed: 0,
                rule: Rule::NoFire,
                direction: Direction::Down,
                to: Pos::new(0, 1),
            },
            StepRecord {
                step: 1,
                from: Pos::new(0, 1),
                sensed: 2,
                rule: Rule::Ambiguous,
                direction: Direction::Right,
                to: Pos::new(1, 1),
            },
        ];
        let mut writer = Writer::from_writer(vec![]);
        write_records(&mut writer, &records).unwrap();
        let text = String::from_utf8(writer.into_inner().ok().unwrap()).unwrap();
        assert_eq!(
            text,
            "step,from_x,from_y,sensed,rule,direction,to_x,to_y\n\
             0,0,0,0,no_fire,Down,0,1\n\
             1,0,1,2,ambiguous,Right,1,1\n"
        );
    }

    #[test]
    fn test_empty_trace_has_header_only() {
        let mut writer = Writer::from_writer(vec![]);
        write_records(&mut writer, &[]).unwrap();
        let text = String::from_utf8(writer.into_inner().ok().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
