//! Values that know how to render themselves.

use crate::fragment::{Fragment, Piece, ToPiece};

/// A component. References to it can be appended to a `Fragment`
/// (or returned from element content closures), which calls
/// `render` at that point. Owned components are accepted as
/// `Box<dyn Renderable>` or `FnComponent`; for other owned values
/// append `&value` or `value.render()`.
pub trait Renderable {
    fn render(&self) -> Fragment;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self) -> Fragment {
        (**self).render()
    }
}

impl ToPiece for Box<dyn Renderable> {
    fn to_piece(self) -> Piece {
        Piece::Fragment(self.render())
    }
}

/// A component defined by a closure, see `component`.
pub struct FnComponent<F>(F);

impl<F, C> Renderable for FnComponent<F>
    where F: Fn() -> C,
          C: ToPiece
{
    fn render(&self) -> Fragment {
        (self.0)().to_piece().into_fragment()
    }
}

impl<F, C> ToPiece for FnComponent<F>
    where F: Fn() -> C,
          C: ToPiece
{
    fn to_piece(self) -> Piece {
        Piece::Fragment(self.render())
    }
}

/// Turn a closure into a component, for one-off components that
/// don't warrant their own type.
pub fn component<F, C>(f: F) -> FnComponent<F>
    where F: Fn() -> C,
          C: ToPiece
{
    FnComponent(f)
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Greeting {
        name: &'static str,
    }

    impl Renderable for Greeting {
        fn render(&self) -> Fragment {
            Fragment::from("Hello, ").append(self.name).append("!")
        }
    }

    #[test]
    fn t_append_renderable() {
        let g = Greeting { name: "World" };
        let f = Fragment::from("<p>").append(&g).append("</p>");
        assert_eq!(f.to_text(), "<p>Hello, World!</p>");

        let boxed: Box<dyn Renderable> = Box::new(Greeting { name: "Box" });
        let f = Fragment::new().append(&boxed).append(&*boxed);
        assert_eq!(f.to_text(), "Hello, Box!Hello, Box!");
    }

    #[test]
    fn t_render_called_at_append_time() {
        let calls = Cell::new(0);
        let c = component(|| {
            calls.set(calls.get() + 1);
            "x"
        });
        let f = Fragment::new().append(&c).append(&c);
        assert_eq!(calls.get(), 2);
        assert_eq!(f.to_text(), "xx");
        assert_eq!(f.to_text(), "xx");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn t_append_owned() {
        let boxed: Box<dyn Renderable> = Box::new(Greeting { name: "Owned" });
        let f = Fragment::new().append(boxed).append(component(|| "."));
        assert_eq!(f.to_text(), "Hello, Owned!.");

        let make = || -> Box<dyn Renderable> { Box::new(Greeting { name: "C" }) };
        let f = crate::elements::p_with([], make);
        assert_eq!(f.to_text(), "<p>Hello, C!</p>");
    }

    #[test]
    fn t_component_returning_fragment() {
        let c = component(|| Fragment::from("a").append("b"));
        assert_eq!(c.render(), "ab");
    }
}
