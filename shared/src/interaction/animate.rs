/// Contract shared by every frame-driven effect on the page.
///
/// Inputs arrive whenever their source fires; `tick` is called once per
/// animation frame with the seconds since the previous frame. The driving
/// loop may stop ticking while `is_settled` holds and resume on the next input.
pub trait Animate {
    type Input;
    type Output: Clone + PartialEq;

    fn apply(&mut self, input: Self::Input);

    fn tick(&mut self, elapsed_seconds: f64);

    fn is_settled(&self) -> bool;

    fn output(&self) -> Self::Output;
}
