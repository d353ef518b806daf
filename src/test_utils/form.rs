use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the select element `name` lists `want` as (value, label) pairs,
/// ignoring the placeholder option with an empty value, and that `selected`
/// is the selected value.
#[track_caller]
pub(crate) fn assert_select_options(
    form: &ElementRef<'_>,
    name: &str,
    want: &[(&str, &str)],
    selected: Option<&str>,
) {
    let selector = Selector::parse(&format!("select[name=\"{name}\"] option")).unwrap();
    let options: Vec<_> = form.select(&selector).collect();

    let got: Vec<_> = options
        .iter()
        .filter_map(|option| {
            let value = option.value().attr("value").unwrap_or_default();
            let label = option.text().collect::<String>();
            (!value.is_empty()).then(|| (value, label.trim().to_owned()))
        })
        .collect();
    let want: Vec<_> = want
        .iter()
        .map(|(value, label)| (*value, label.to_string()))
        .collect();
    assert_eq!(want, got);

    let got_selected = options
        .iter()
        .find(|option| option.value().attr("selected").is_some())
        .and_then(|option| option.value().attr("value"));
    assert_eq!(selected, got_selected);
}

#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let selector = Selector::parse("p[role=\"alert\"]").unwrap();
    let messages: Vec<_> = form
        .select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_owned())
        .collect();

    assert!(
        messages.iter().any(|message| message == want_error_message),
        "want error message {want_error_message:?}, got {messages:?}"
    );
}
