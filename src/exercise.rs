// src/exercise.rs
//
// The operator exercise as a table of checks: scaling in both operand
// orders, products, in-place multiplication, equality and the relational
// operators. `fraction_check` prints the resulting report.

use crate::error::Result;
use crate::report::CheckReport;
use crate::types::fraction::Fraction;

#[allow(clippy::eq_op)]
pub fn run() -> Result<CheckReport> {
    let mut report = CheckReport::new();

    let three = Fraction::from_integer(3);
    let athird = Fraction::new(1, 3)?;

    report.note(format!("Three: {}", three));
    report.note(format!("One third: {}", athird));

    report.check("One third times two", athird * 2, Fraction::new(2, 3)?);
    report.check("Two times one third", 2 * athird, Fraction::new(2, 3)?);

    report.check("Three times one third", three * athird, Fraction::new(1, 1)?);
    report.check("Three times one third", 3 * athird, Fraction::new(1, 1)?);

    let mut f = athird;
    f *= 2;
    report.check("One third times two", f, Fraction::new(2, 3)?);

    f *= athird;
    report.check("Two third times one third", f, Fraction::new(2, 9)?);

    report.check("One third == one third", athird == Fraction::new(1, 3)?, true);
    report.check("One third != one forth", athird != Fraction::new(1, 4)?, true);
    report.check("One third == two sixth", athird == Fraction::new(2, 6)?, true);
    report.check("One third != three sixth", athird != Fraction::new(3, 6)?, true);

    let afourth = Fraction::new(1, 4)?;
    report.check("athird < athird", athird < athird, false);
    report.check("afourth < athird", afourth < athird, true);
    report.check("athird  <= athird", athird <= athird, true);
    report.check("athird  <= afourth", athird <= afourth, false);
    report.check("athird  > athird", athird > athird, false);
    report.check("afourth > athird", afourth > athird, false);
    report.check("athird >= athird", athird >= athird, true);
    report.check("athird >= afourth", athird >= afourth, true);

    Ok(report)
}
