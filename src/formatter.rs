use crate::auction::{GraphqlResponse, QueryResponse};

/// Renders the query outcome for the terminal: the full envelope is
/// always dumped pretty-printed for diagnostics; purchased items are
/// listed only when the envelope carries no GraphQL errors.
pub fn render(envelope: &GraphqlResponse<QueryResponse>) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(envelope)?;
    out.push('\n');

    if envelope.has_errors() {
        return Ok(out);
    }

    if let Some(response) = envelope.data.as_ref() {
        out.push_str(&format_purchased_assets(response));
    }

    Ok(out)
}

/// One line per purchased asset, in server order.
pub fn format_purchased_assets(response: &QueryResponse) -> String {
    let mut out = String::new();
    for asset in &response.auction.assets.purchased.items {
        out.push_str(&format!(
            "{} {} {} ({})\n",
            asset.year, asset.make, asset.model, asset.vin
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_items(items: &str) -> QueryResponse {
        serde_json::from_str(&format!(
            r#"{{"auction":{{"assets":{{"purchased":{{"items":{items}}}}}}}}}"#
        ))
        .unwrap()
    }

    fn envelope(
        data: Option<QueryResponse>,
        errors: &str,
    ) -> GraphqlResponse<QueryResponse> {
        let errors = serde_json::from_str(errors).unwrap();
        GraphqlResponse { data, errors }
    }

    #[test]
    fn one_line_per_item_in_server_order() {
        let response = response_with_items(
            r#"[
                {"vin": "1HGCM82633A004352", "year": "2003", "make": "Honda", "model": "Accord"},
                {"vin": "2T1BURHE5JC970113", "year": "2018", "make": "Toyota", "model": "Corolla"}
            ]"#,
        );

        let out = format_purchased_assets(&response);
        assert_eq!(
            out,
            "2003 Honda Accord (1HGCM82633A004352)\n2018 Toyota Corolla (2T1BURHE5JC970113)\n"
        );
    }

    #[test]
    fn empty_items_produce_no_lines() {
        let response = response_with_items("[]");
        assert_eq!(format_purchased_assets(&response), "");
    }

    #[test]
    fn render_dumps_envelope_then_items() {
        let response = response_with_items(
            r#"[{"vin": "1HGCM82633A004352", "year": "2003", "make": "Honda", "model": "Accord"}]"#,
        );
        let out = render(&envelope(Some(response), "null")).unwrap();

        assert!(out.starts_with("{"));
        assert!(out.contains("\"1HGCM82633A004352\""));
        assert!(out.ends_with("2003 Honda Accord (1HGCM82633A004352)\n"));
    }

    #[test]
    fn render_skips_items_when_errors_present() {
        let response = response_with_items(
            r#"[{"vin": "1HGCM82633A004352", "year": "2003", "make": "Honda", "model": "Accord"}]"#,
        );
        let out = render(&envelope(
            Some(response),
            r#"[{"message": "field access denied"}]"#,
        ))
        .unwrap();

        assert!(out.contains("field access denied"));
        assert!(!out.contains("2003 Honda Accord (1HGCM82633A004352)\n"));
    }

    #[test]
    fn render_with_empty_error_list_still_lists_items() {
        let response = response_with_items(
            r#"[{"vin": "1HGCM82633A004352", "year": "2003", "make": "Honda", "model": "Accord"}]"#,
        );
        let out = render(&envelope(Some(response), "[]")).unwrap();
        assert!(out.ends_with("2003 Honda Accord (1HGCM82633A004352)\n"));
    }

    #[test]
    fn render_tolerates_missing_data() {
        let out = render(&envelope(None, "null")).unwrap();
        assert!(out.starts_with("{"));
        assert!(out.ends_with("}\n"));
    }
}
