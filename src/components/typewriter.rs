use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding,
    Deleting,
}

/// Types `text` a character at a time, holds it, deletes it and starts over.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    stage: Stage,
    step_ms: u32,
    hold_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, step_ms: u32, hold_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            stage: Stage::Typing,
            step_ms,
            hold_ms,
        }
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// How long the current text stays on screen before the next step.
    pub fn dwell(&self) -> u32 {
        match self.stage {
            _ if self.chars.is_empty() => self.hold_ms,
            Stage::Holding => self.hold_ms,
            Stage::Typing | Stage::Deleting => self.step_ms,
        }
    }

    /// Advances one character, typing or deleting.
    pub fn tick(&mut self) {
        if self.chars.is_empty() {
            return;
        }
        match self.stage {
            Stage::Typing => {
                self.shown += 1;
                if self.shown == self.chars.len() {
                    self.stage = Stage::Holding;
                }
            }
            Stage::Holding | Stage::Deleting => {
                self.shown -= 1;
                self.stage = if self.shown == 0 {
                    Stage::Typing
                } else {
                    Stage::Deleting
                };
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or(50)]
    pub step_ms: u32,
    #[prop_or(1000)]
    pub hold_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterHeading)]
pub fn typewriter_heading(props: &TypewriterProps) -> Html {
    let state = use_state(|| Typewriter::new(&props.text, props.step_ms, props.hold_ms));

    {
        let current = (*state).clone();
        let state = state.clone();
        // Re-armed after every step; dropping the Timeout on cleanup cancels it.
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = current.clone();
                next.tick();
                let timeout = Timeout::new(current.dwell(), move || state.set(next));
                move || drop(timeout)
            },
            current,
        );
    }

    html! {
        <h1 class={classes!("typewriter", props.class.clone())} aria-label={props.text.clone()}>
            { state.visible() }
            <span class="typewriter-cursor" aria-hidden="true">{"|"}</span>
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each text the heading shows, paired with how long it stays up.
    fn frames(tw: &mut Typewriter, steps: usize) -> Vec<(String, u32)> {
        (0..steps)
            .map(|_| {
                let frame = (tw.visible(), tw.dwell());
                tw.tick();
                frame
            })
            .collect()
    }

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new("abc", 50, 1000);
        let shown: Vec<String> = frames(&mut tw, 8).into_iter().map(|(text, _)| text).collect();
        assert_eq!(shown, ["", "a", "ab", "abc", "ab", "a", "", "a"]);
    }

    #[test]
    fn test_full_text_holds_longest() {
        let mut tw = Typewriter::new("abc", 50, 1000);
        for (text, ms) in frames(&mut tw, 14) {
            if text == "abc" {
                assert_eq!(ms, 1000, "full text must hold");
            } else {
                assert_eq!(ms, 50, "{:?} should advance at the step rate", text);
            }
        }
    }

    #[test]
    fn test_multiline_and_unicode() {
        let mut tw = Typewriter::new("é\nü", 10, 20);
        let got = frames(&mut tw, 4);
        assert_eq!(got[1], ("é".to_string(), 10));
        assert_eq!(got[2], ("é\n".to_string(), 10));
        assert_eq!(got[3], ("é\nü".to_string(), 20));
    }

    #[test]
    fn test_empty_text_never_panics() {
        let mut tw = Typewriter::new("", 50, 1000);
        assert_eq!(frames(&mut tw, 3), vec![(String::new(), 1000); 3]);
    }

    #[test]
    fn test_single_char() {
        let mut tw = Typewriter::new("x", 50, 1000);
        let got = frames(&mut tw, 4);
        assert_eq!(got[1], ("x".to_string(), 1000));
        assert_eq!(got[2], (String::new(), 50));
        assert_eq!(got[3], ("x".to_string(), 1000));
    }
}
