#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_error_message, assert_form_input_with_value, assert_hx_endpoint,
    assert_select_options, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, must_get_table_rows, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, get_header};
