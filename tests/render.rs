use html_native::{elements::*, att, bool_att, is_valid, is_valid_for, render_tag,
                  render_tag_named, when, AttributeDb, Attributes, Conditional, Fragment,
                  Renderable, Tag};

#[test]
fn t_validator_properties() {
    let db = AttributeDb::builtin();
    let probes = ["class", "id", "style", "hidden", "data-x", "lang", "autoplay", "href",
                  "checked", "for", "bgcolor", "border", "manifest", "src", "type"];
    for tag in Tag::all() {
        for attribute in probes {
            let expected = match db.allowed_tags(attribute) {
                Some(tags) => tags.contains(tag.as_str()),
                None => !db.is_forbidden(attribute),
            };
            assert_eq!(is_valid(tag.as_str(), attribute), expected, "{attribute} on {tag}");
            assert_eq!(is_valid_for(tag, attribute), expected, "{attribute} on {tag}");
        }
    }
}

#[test]
fn t_render_examples() {
    assert_eq!(div([]).to_text(), "<div/>");
    assert_eq!(div_with([att("class", "x")], || "hi").to_text(),
               "<div class=\"x\">hi</div>");
    assert_eq!(input([att("type", "radio"), att("checked", "")]).to_text(),
               "<input type=\"radio\" checked/>");
    assert_eq!(video([bool_att("autoplay")]).to_text(), "<video autoplay/>");
    assert_eq!(p([bool_att("autoplay")]).to_text(), "<p/>");
    assert_eq!(a([att("bgcolor", "red")]).to_text(), "<a/>");
}

#[test]
fn t_render_tag_and_named_agree() {
    for tag in Tag::all() {
        let atts = Attributes::new().with("id", "i").with("href", "/");
        let f1 = render_tag(tag, &atts, Some(|| "c"));
        let f2 = render_tag_named(tag.as_str(), &atts, Some(|| "c")).unwrap();
        assert_eq!(f1, f2);
        let name = tag.as_str();
        let expected_atts = if is_valid(name, "href") {
            " id=\"i\" href=\"/\""
        } else {
            " id=\"i\""
        };
        assert_eq!(f1.to_text(), format!("<{name}{expected_atts}>c</{name}>"));
    }
}

#[test]
fn t_fragment_caching() {
    let mut f = Fragment::new();
    assert_eq!(f.to_text(), "");
    f.push("a");
    assert_eq!(f.to_text(), "a");
    f.push(Fragment::from("b"));
    assert_eq!(f.to_text(), "ab");
    assert_eq!(f.to_text(), "ab");
    f.push("c");
    assert_eq!(f.to_text(), "abc");
    assert_eq!(f.to_text(), "abc");

    let g = Fragment::new().append("a").append(Fragment::new().append("b")).append("c");
    assert_eq!(g.to_text(), "abc");
}

#[test]
fn t_conditionals() {
    let f = Fragment::from("text");
    assert_eq!(f.clone().if_true(false).to_text(), "");
    assert_eq!(f.clone().if_true(true).to_text(), "text");
    assert_eq!("x".if_false(true).to_text(), "");
    assert_eq!(when(false, || -> Fragment { unreachable!() }).to_text(), "");
}

struct Card {
    title: String,
    body: Fragment,
}

impl Renderable for Card {
    fn render(&self) -> Fragment {
        section_with([att("class", "card")], || {
            h2_with([], || &self.title) + &self.body
        })
    }
}

#[test]
fn t_renderable_in_elements() {
    let card = Card {
        title: "T".into(),
        body: p_with([], || "body"),
    };
    let page = main_with([], || &card);
    assert_eq!(page.to_text(),
               "<main><section class=\"card\"><h2>T</h2><p>body</p></section></main>");
    // rendering again gives the same result
    assert_eq!(card.render(), "<section class=\"card\"><h2>T</h2><p>body</p></section>");

    let page = main_with([], || -> Box<dyn Renderable> {
        Box::new(Card { title: "U".into(), body: Fragment::new() })
    });
    assert_eq!(page.to_text(),
               "<main><section class=\"card\"><h2>U</h2></section></main>");
}
