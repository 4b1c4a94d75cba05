use crate::error::{NativeFailure, RegisterError};
use crate::native::{NativeModule, NativeResult};
use crate::registry::FunctionTable;
use crate::signature::FunctionSignature;
use values::{Kind, Rational, RationalError, Value};

/// Elementary arithmetic over the numeric kinds.
pub struct Math;

impl NativeModule for Math {
    fn name(&self) -> &'static str {
        "math"
    }

    fn install(&self, table: &mut FunctionTable) -> Result<(), RegisterError> {
        table.define("Sqr", || {
            FunctionSignature::new(native_sqr, 1).parameter("n", Kind::Numerical, None)
        })?;
        table.define("Abs", || {
            FunctionSignature::new(native_abs, 1).parameter("n", Kind::Numerical, None)
        })?;
        table.define("Angle", || {
            FunctionSignature::new(native_angle, 2)
                .parameter("x", Kind::Double, Some(Value::double(1.0)))?
                .parameter("y", Kind::Double, Some(Value::double(1.0)))
        })?;
        table.define("Power", || {
            FunctionSignature::new(native_power, 2)
                .parameter("base", Kind::Double, None)?
                .parameter("exponent", Kind::Double, Some(Value::double(2.0)))
        })?;
        table.define("Exp", || {
            FunctionSignature::new(native_exp, 1).parameter("x", Kind::Double, None)
        })?;
        table.define("Log", || {
            FunctionSignature::new(native_log, 1).parameter("x", Kind::Double, None)
        })?;
        table.define("Divide", || {
            FunctionSignature::new(native_divide, 2)
                .parameter("num", Kind::Numerical, None)?
                .parameter("den", Kind::Numerical, None)
        })?;
        Ok(())
    }
}

fn take<const N: usize>(args: Vec<Value>) -> Result<[Value; N], NativeFailure> {
    let got = args.len();
    args.try_into().map_err(|_| NativeFailure::arity(N, got))
}

fn double(name: &str, value: &Value) -> Result<f64, NativeFailure> {
    value
        .as_double()
        .ok_or_else(|| NativeFailure::kind_mismatch(name, "a double", value.kind()))
}

fn overflow(_: RationalError) -> NativeFailure {
    NativeFailure::new("rational arithmetic overflow")
}

/// Exact operands (integer or rational) as a rational, `None` for doubles.
fn exact(name: &str, value: &Value) -> Result<Option<Rational>, NativeFailure> {
    match value {
        Value::Integer(n) => Ok(Some(Rational::from_integer(*n))),
        Value::Rational(r) => Ok(Some(*r)),
        Value::Double(_) => Ok(None),
        other => Err(NativeFailure::kind_mismatch(name, "numeric", other.kind())),
    }
}

fn from_exact(r: Rational) -> Value {
    if r.is_integer() {
        Value::Integer(r.numer())
    } else {
        Value::Rational(r)
    }
}

pub fn native_sqr(args: Vec<Value>) -> NativeResult {
    let [n] = take(args)?;
    match n {
        Value::Integer(i) => i
            .checked_mul(i)
            .map(Value::Integer)
            .ok_or_else(|| NativeFailure::new("integer overflow")),
        Value::Double(x) => Ok(Value::Double(x * x)),
        Value::Rational(r) => r.checked_mul(&r).map(Value::Rational).map_err(overflow),
        other => Err(NativeFailure::kind_mismatch("n", "numeric", other.kind())),
    }
}

pub fn native_abs(args: Vec<Value>) -> NativeResult {
    let [n] = take(args)?;
    match n {
        Value::Integer(i) => i
            .checked_abs()
            .map(Value::Integer)
            .ok_or_else(|| NativeFailure::new("integer overflow")),
        Value::Double(x) => Ok(Value::Double(x.abs())),
        Value::Rational(r) => r.checked_abs().map(Value::Rational).map_err(overflow),
        other => Err(NativeFailure::kind_mismatch("n", "numeric", other.kind())),
    }
}

/// Angle of the vector `(x, y)`, in radians.
pub fn native_angle(args: Vec<Value>) -> NativeResult {
    let [x, y] = take(args)?;
    let (x, y) = (double("x", &x)?, double("y", &y)?);
    Ok(Value::Double(y.atan2(x)))
}

pub fn native_power(args: Vec<Value>) -> NativeResult {
    let [base, exponent] = take(args)?;
    let (base, exponent) = (double("base", &base)?, double("exponent", &exponent)?);
    let result = base.powf(exponent);
    if result.is_nan() {
        return Err(NativeFailure::new(format!(
            "{base} raised to {exponent} is not a real number"
        )));
    }
    Ok(Value::Double(result))
}

pub fn native_exp(args: Vec<Value>) -> NativeResult {
    let [x] = take(args)?;
    Ok(Value::Double(double("x", &x)?.exp()))
}

pub fn native_log(args: Vec<Value>) -> NativeResult {
    let [x] = take(args)?;
    let x = double("x", &x)?;
    if x <= 0.0 {
        return Err(NativeFailure::new(format!("logarithm of non-positive value {x}")));
    }
    Ok(Value::Double(x.ln()))
}

/// Exact when both operands are exact, floating point otherwise.
pub fn native_divide(args: Vec<Value>) -> NativeResult {
    let [num, den] = take(args)?;
    match (exact("num", &num)?, exact("den", &den)?) {
        (Some(n), Some(d)) => {
            if d.is_zero() {
                return Err(NativeFailure::new("division by zero"));
            }
            n.checked_div(&d).map(from_exact).map_err(overflow)
        }
        _ => {
            let (n, d) = (num.to_f64(), den.to_f64());
            match (n, d) {
                (Some(_), Some(d)) if d == 0.0 => Err(NativeFailure::new("division by zero")),
                (Some(n), Some(d)) => Ok(Value::Double(n / d)),
                _ => Err(NativeFailure::new("operands must be numeric")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqr_keeps_the_argument_kind() {
        assert_eq!(native_sqr(vec![Value::integer(-4)]), Ok(Value::integer(16)));
        assert_eq!(native_sqr(vec![Value::double(1.5)]), Ok(Value::double(2.25)));
        assert_eq!(
            native_sqr(vec![Value::rational(2, 3).unwrap()]),
            Ok(Value::rational(4, 9).unwrap())
        );
    }

    #[test]
    fn sqr_reports_overflow_as_failure() {
        assert!(native_sqr(vec![Value::integer(i64::MAX)]).is_err());
    }

    #[test]
    fn wrong_arity_is_a_failure_not_a_panic() {
        let err = native_angle(vec![Value::double(1.0)]).unwrap_err();
        assert_eq!(err.reason, "expected 2 argument(s), got 1");
    }

    #[test]
    fn divide_is_exact_for_integers() {
        assert_eq!(
            native_divide(vec![Value::integer(6), Value::integer(4)]),
            Ok(Value::rational(3, 2).unwrap())
        );
        assert_eq!(
            native_divide(vec![Value::integer(6), Value::integer(3)]),
            Ok(Value::integer(2))
        );
        assert_eq!(
            native_divide(vec![Value::integer(1), Value::double(4.0)]),
            Ok(Value::double(0.25))
        );
    }

    #[test]
    fn divide_by_zero_fails() {
        assert!(native_divide(vec![Value::integer(1), Value::integer(0)]).is_err());
        assert!(native_divide(vec![Value::double(1.0), Value::double(0.0)]).is_err());
    }

    #[test]
    fn log_rejects_non_positive() {
        assert!(native_log(vec![Value::double(0.0)]).is_err());
        assert_eq!(native_log(vec![Value::double(1.0)]), Ok(Value::double(0.0)));
    }
}
