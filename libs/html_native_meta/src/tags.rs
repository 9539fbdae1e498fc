//! The supported HTML5 elements.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Calls the macro `$callback` with the list of all supported
/// elements, each entry as `(Variant, fn_name, fn_name_with,
/// "tag-name")`. Used to define `Tag` here and the per-element
/// generator functions in the html_native crate, so that both are
/// always in sync.
#[macro_export]
macro_rules! with_tag_list {
    ($callback:ident) => {
        $callback! {
            (Html, html, html_with, "html"),

            (Base, base, base_with, "base"),
            (Head, head, head_with, "head"),
            (Link, link, link_with, "link"),
            (Meta, meta, meta_with, "meta"),
            (Style, style, style_with, "style"),
            (Title, title, title_with, "title"),

            (Body, body, body_with, "body"),

            (Address, address, address_with, "address"),
            (Article, article, article_with, "article"),
            (Aside, aside, aside_with, "aside"),
            (Footer, footer, footer_with, "footer"),
            (H1, h1, h1_with, "h1"),
            (H2, h2, h2_with, "h2"),
            (H3, h3, h3_with, "h3"),
            (H4, h4, h4_with, "h4"),
            (H5, h5, h5_with, "h5"),
            (H6, h6, h6_with, "h6"),
            (Header, header, header_with, "header"),
            (Hgroup, hgroup, hgroup_with, "hgroup"),
            (Main, main, main_with, "main"),
            (Nav, nav, nav_with, "nav"),
            (Section, section, section_with, "section"),

            (Blockquote, blockquote, blockquote_with, "blockquote"),
            (Dd, dd, dd_with, "dd"),
            (Div, div, div_with, "div"),
            (Dl, dl, dl_with, "dl"),
            (Dt, dt, dt_with, "dt"),
            (Figcaption, figcaption, figcaption_with, "figcaption"),
            (Figure, figure, figure_with, "figure"),
            (Hr, hr, hr_with, "hr"),
            (Li, li, li_with, "li"),
            (Ol, ol, ol_with, "ol"),
            (P, p, p_with, "p"),
            (Pre, pre, pre_with, "pre"),
            (Ul, ul, ul_with, "ul"),

            (A, a, a_with, "a"),
            (Abbr, abbr, abbr_with, "abbr"),
            (B, b, b_with, "b"),
            (Bdi, bdi, bdi_with, "bdi"),
            (Bdo, bdo, bdo_with, "bdo"),
            (Br, br, br_with, "br"),
            (Cite, cite, cite_with, "cite"),
            (Code, code, code_with, "code"),
            (Data, data, data_with, "data"),
            (Dfn, dfn, dfn_with, "dfn"),
            (Em, em, em_with, "em"),
            (I, i, i_with, "i"),
            (Kbd, kbd, kbd_with, "kbd"),
            (Mark, mark, mark_with, "mark"),
            (Q, q, q_with, "q"),
            (Rb, rb, rb_with, "rb"),
            (Rp, rp, rp_with, "rp"),
            (Rt, rt, rt_with, "rt"),
            (Rtc, rtc, rtc_with, "rtc"),
            (Ruby, ruby, ruby_with, "ruby"),
            (S, s, s_with, "s"),
            (Samp, samp, samp_with, "samp"),
            (Small, small, small_with, "small"),
            (Span, span, span_with, "span"),
            (Strong, strong, strong_with, "strong"),
            (Sub, sub, sub_with, "sub"),
            (Sup, sup, sup_with, "sup"),
            (Time, time, time_with, "time"),
            (U, u, u_with, "u"),
            (Var, var, var_with, "var"),
            (Wbr, wbr, wbr_with, "wbr"),

            (Area, area, area_with, "area"),
            (Audio, audio, audio_with, "audio"),
            (Img, img, img_with, "img"),
            (Map, map, map_with, "map"),
            (Track, track, track_with, "track"),
            (Video, video, video_with, "video"),

            (Embed, embed, embed_with, "embed"),
            (Iframe, iframe, iframe_with, "iframe"),
            (Object, object, object_with, "object"),
            (Param, param, param_with, "param"),
            (Picture, picture, picture_with, "picture"),
            (Portal, portal, portal_with, "portal"),
            (Source, source, source_with, "source"),

            (Svg, svg, svg_with, "svg"),
            (Math, math, math_with, "math"),

            (Canvas, canvas, canvas_with, "canvas"),
            (Noscript, noscript, noscript_with, "noscript"),
            (Script, script, script_with, "script"),

            (Del, del, del_with, "del"),
            (Ins, ins, ins_with, "ins"),

            (Caption, caption, caption_with, "caption"),
            (Col, col, col_with, "col"),
            (Colgroup, colgroup, colgroup_with, "colgroup"),
            (Table, table, table_with, "table"),
            (Tbody, tbody, tbody_with, "tbody"),
            (Td, td, td_with, "td"),
            (Tfoot, tfoot, tfoot_with, "tfoot"),
            (Th, th, th_with, "th"),
            (Thead, thead, thead_with, "thead"),
            (Tr, tr, tr_with, "tr"),

            (Button, button, button_with, "button"),
            (Datalist, datalist, datalist_with, "datalist"),
            (Fieldset, fieldset, fieldset_with, "fieldset"),
            (Form, form, form_with, "form"),
            (Input, input, input_with, "input"),
            (Label, label, label_with, "label"),
            (Legend, legend, legend_with, "legend"),
            (Meter, meter, meter_with, "meter"),
            (Optgroup, optgroup, optgroup_with, "optgroup"),
            (Option, option, option_with, "option"),
            (Output, output, output_with, "output"),
            (Progress, progress, progress_with, "progress"),
            (Select, select, select_with, "select"),
            (Textarea, textarea, textarea_with, "textarea"),

            (Details, details, details_with, "details"),
            (Dialog, dialog, dialog_with, "dialog"),
            (Menu, menu, menu_with, "menu"),
            (Summary, summary, summary_with, "summary"),

            (Slot, slot, slot_with, "slot"),
            (Template, template, template_with, "template"),
        }
    }
}

macro_rules! define_tag_enum {
    ( $( ($variant:ident, $fn_name:ident, $fn_with:ident, $name:literal) ),* $(,)? ) => {
        /// An HTML5 element name. Only these can be generated; there
        /// is no way to construct markup for arbitrary tag names.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
                 EnumString, IntoStaticStr, EnumIter, Display)]
        pub enum Tag {
            $(
                #[strum(serialize = $name)]
                $variant,
            )*
        }
    }
}

with_tag_list!(define_tag_enum);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HTML element name {0:?}")]
pub struct UnknownTagError(pub String);

impl Tag {
    /// The element name as used in markup, e.g. "h1".
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Names are matched exactly, i.e. they have to be lowercase.
    pub fn from_name(name: &str) -> Result<Tag, UnknownTagError> {
        Tag::from_str(name).map_err(|_| UnknownTagError(name.into()))
    }

    pub fn all() -> impl Iterator<Item = Tag> {
        Tag::iter()
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
