use crate::interpreter::evaluator::trace::Trace;

/// Negates `value` and records the step as `"-(value) = result"`.
pub(in crate::interpreter::evaluator) fn eval_negate(value: f64, trace: &mut Trace) -> f64 {
    let result = -value;
    trace.push(format!("-({value}) = {result}"));
    result
}
