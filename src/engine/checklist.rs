//! The fixed catalogue of documents the demo "generates" for every client.

/// Civil-petition document checklist, in download order.
pub const DOCUMENT_CHECKLIST: [&str; 20] = [
    "소득금액증명원(최근5년)",
    "사업자등록증명원",
    "폐업사실증명원",
    "납세증명서",
    "부가가치세과세표준증명원",
    "소득세납부내역",
    "지방세납세증명서",
    "세목별과세증명서",
    "근로소득원천징수영수증",
    "소득확인증명서",
    "주민등록등본",
    "주민등록초본(5년이상주소변동포함)",
    "가족관계증명서(상세)",
    "혼인관계증명서(상세)",
    "기본증명서(상세)",
    "토지대장",
    "건축물대장",
    "자동차등록원부",
    "지방세세목별과세증명서",
    "국민연금가입증명서",
];

/// File stems for `client`, e.g. `"임지혁_납세증명서"`.
pub fn document_stems(client: &str) -> Vec<String> {
    DOCUMENT_CHECKLIST
        .iter()
        .map(|doc| format!("{client}_{doc}"))
        .collect()
}

/// Placeholder body written into every generated file.
pub fn placeholder_content(stem: &str, client: &str, generated_at: &str) -> String {
    format!(
        "{stem}\n\n이 문서는 AI에 의해 자동 생성된 테스트 문서입니다.\n\n의뢰인: {client}\n생성일: {generated_at}\n\n내용은 데모용 샘플입니다."
    )
}
