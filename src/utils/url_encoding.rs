use std::collections::BTreeMap;

/// Decodes an `application/x-www-form-urlencoded` body, keeping every value
/// submitted for a key in submission order.
pub fn parse_urlencoded_body(body: &[u8]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let raw = String::from_utf8_lossy(body);
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, '=');
        let key_enc = parts.next().unwrap_or("").replace('+', " ");
        let val_enc = parts.next().unwrap_or("").replace('+', " ");
        let key = urlencoding::decode(&key_enc).map(|k| k.into_owned()).unwrap_or_else(|_| key_enc.clone());
        let val = urlencoding::decode(&val_enc).map(|v| v.into_owned()).unwrap_or_else(|_| val_enc.clone());
        map.entry(key).or_default().push(val);
    }
    map
}
