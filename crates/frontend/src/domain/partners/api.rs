use contracts::domain::normalize;
use contracts::domain::partner::{self, BusinessPartner, PartnerAddress};

use crate::shared::api_utils::{get_json, get_records};

pub async fn fetch_partner(token: &str, card_code: &str) -> Result<BusinessPartner, String> {
    let path = format!(
        "/api/sap/business-partners/{}",
        urlencoding::encode(card_code)
    );
    let value: serde_json::Value = get_json(&path, token).await?;
    Ok(partner::partner(&normalize::record(value)))
}

pub async fn fetch_addresses(token: &str, card_code: &str) -> Result<Vec<PartnerAddress>, String> {
    let path = format!(
        "/api/sap/business-partners/{}/addresses",
        urlencoding::encode(card_code)
    );
    let records = get_records(&path, token).await?;
    Ok(records.iter().map(partner::address).collect())
}
