use std::collections::BTreeSet;

use diam_proto_compiler::{
    compile_dictionary, generate,
    types::{CompositeKind, Field},
    GenerateError, GeneratorConfig, NumberingPolicy, RenderOptions,
};
use diam_proto_dictionary::Dictionary;

const BASE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<diameter>
  <application id="0" name="Base">
    <avp name="Session-Id" code="263"><data type="UTF8String"/></avp>
    <avp name="Origin-Host" code="264"><data type="DiameterIdentity"/></avp>
    <avp name="Result-Code" code="268"><data type="Unsigned32"/></avp>
  </application>
</diameter>"#;

const GY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<diameter>
  <application id="4" type="auth" name="Charging Control">
    <command code="272" short="CC" name="Credit-Control">
      <request>
        <rule avp="Session-Id" required="true" max="1"/>
        <rule avp="Origin-Host" required="true" max="1"/>
        <rule avp="CC-Request-Type" required="true" max="1"/>
        <rule avp="CC-Request-Number" required="true" max="1"/>
        <rule avp="Subscription-Id" required="false"/>
        <rule avp="9999" required="true" max="1"/>
      </request>
      <answer>
        <rule avp="Session-Id" required="true" max="1"/>
        <rule avp="Result-Code" required="true" max="1"/>
        <rule avp="CC-Request-Type" required="true" max="1"/>
      </answer>
    </command>
    <avp name="CC-Request-Number" code="415"><data type="Unsigned32"/></avp>
    <avp name="CC-Request-Type" code="416"><data type="Enumerated">
      <item code="1" name="INITIAL_REQUEST"/>
      <item code="2" name="UPDATE_REQUEST"/>
      <item code="3" name="TERMINATION_REQUEST"/>
      <item code="4" name="EVENT_REQUEST"/>
    </data></avp>
    <avp name="Subscription-Id" code="443"><data type="Grouped">
      <rule avp="Subscription-Id-Type" required="true" max="1"/>
      <rule avp="Subscription-Id-Data" required="true" max="1"/>
    </data></avp>
    <avp name="Subscription-Id-Data" code="444"><data type="UTF8String"/></avp>
    <avp name="Subscription-Id-Type" code="450"><data type="Enumerated">
      <item code="0" name="END_USER_E164"/>
      <item code="1" name="END_USER_IMSI"/>
    </data></avp>
  </application>
</diameter>"#;

const EXPECTED_SEQ: &str = "\
message ChargingControlCreditControlRequestPB {
\tstring sessionId = 1 [json_name = \"Session-Id\"];
\tstring originHost = 2 [json_name = \"Origin-Host\"];
\tCCRequestTypeEnum cCRequestType = 3 [json_name = \"CC-Request-Type\"];
\tuint32 cCRequestNumber = 4 [json_name = \"CC-Request-Number\"];
\trepeated SubscriptionId subscriptionId = 5 [json_name = \"Subscription-Id\"];
}

message ChargingControlCreditControlAnswerPB {
\tstring sessionId = 1 [json_name = \"Session-Id\"];
\tuint32 resultCode = 2 [json_name = \"Result-Code\"];
\tCCRequestTypeEnum cCRequestType = 3 [json_name = \"CC-Request-Type\"];
}

message CCRequestTypeEnum {
\tvalue Value = 1;
\tenum value {
\t\t_UNDEFINED_REQUEST = 0;
\t\tINITIAL_REQUEST = 1;
\t\tUPDATE_REQUEST = 2;
\t\tTERMINATION_REQUEST = 3;
\t\tEVENT_REQUEST = 4;
\t}
}

message SubscriptionIdTypeEnum {
\tvalue Value = 1;
\tenum value {
\t\tEND_USER_E164 = 0;
\t\tEND_USER_IMSI = 1;
\t}
}

message SubscriptionId {
\tSubscriptionIdTypeEnum subscriptionIdType = 1 [json_name = \"Subscription-Id-Type\"];
\tstring subscriptionIdData = 2 [json_name = \"Subscription-Id-Data\"];
}

";

fn dictionary(extra: &[&str]) -> Dictionary {
    let mut dict = Dictionary::new();
    for text in [BASE, GY].iter().chain(extra.iter()) {
        dict.load_str(text).expect("load dictionary");
    }
    dict
}

fn config(apps: &[u32]) -> GeneratorConfig {
    GeneratorConfig::new(apps.iter().copied().collect::<BTreeSet<u32>>())
}

#[test]
fn test_sequential_output() {
    let dict = dictionary(&[]);
    let proto = compile_dictionary(&dict, &config(&[4]), &RenderOptions::default()).unwrap();
    assert_eq!(proto, EXPECTED_SEQ);
}

#[test]
fn test_output_is_deterministic() {
    let first = compile_dictionary(&dictionary(&[]), &config(&[4]), &RenderOptions::default()).unwrap();
    let second = compile_dictionary(&dictionary(&[]), &config(&[4]), &RenderOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_code_numbering() {
    let dict = dictionary(&[]);
    let schema = generate(&dict, &config(&[4]).with_numbering(NumberingPolicy::AvpCode)).unwrap();
    let request = &schema.definitions[0];
    let numbered: Vec<(u32, u32)> = request
        .fields
        .iter()
        .map(|f| match f {
            Field::Attribute(a) => (a.avp_code, a.number),
            Field::Member(_) => panic!("unexpected enum member"),
        })
        .collect();
    assert_eq!(numbered, vec![(263, 263), (264, 264), (415, 415), (416, 416), (443, 443)]);
}

#[test]
fn test_missing_avp_is_skipped() {
    let dict = dictionary(&[]);
    let schema = generate(&dict, &config(&[4])).unwrap();
    let request = &schema.definitions[0];
    assert_eq!(request.name, "ChargingControlCreditControlRequestPB");
    assert_eq!(request.fields.len(), 5);
    assert!(request.fields.iter().all(|f| f.code() != 9999));
}

#[test]
fn test_unselected_applications_are_ignored() {
    let dict = dictionary(&[]);
    let schema = generate(&dict, &config(&[16777238])).unwrap();
    assert!(schema.definitions.is_empty());
}

#[test]
fn test_nested_types_appear_once() {
    let dict = dictionary(&[]);
    let schema = generate(&dict, &config(&[4])).unwrap();
    let enums = schema.definitions.iter().filter(|d| d.kind == CompositeKind::Enum).count();
    assert_eq!(enums, 2);
    let groups = schema.definitions.iter().filter(|d| d.name == "SubscriptionId").count();
    assert_eq!(groups, 1);
}

const GX_SMALL_GROUP: &str = r#"<diameter>
  <application id="16777238" name="TGPP Gx">
    <vendor id="10415" name="TGPP"/>
    <command code="272" short="CC" name="Credit-Control">
      <request>
        <rule avp="Session-Id" required="true" max="1"/>
        <rule avp="Subscription-Id" required="false" max="1"/>
      </request>
      <answer><rule avp="Session-Id" required="true" max="1"/></answer>
    </command>
    <avp name="Subscription-Id" code="443" vendor-id="10415"><data type="Grouped">
      <rule avp="Subscription-Id-Data" required="true" max="1"/>
    </data></avp>
  </application>
</diameter>"#;

#[test]
fn test_larger_group_definition_wins() {
    // Gx is loaded after Gy but its Subscription-Id has fewer rules.
    let dict = dictionary(&[GX_SMALL_GROUP]);
    let schema = generate(&dict, &config(&[4, 16777238])).unwrap();
    let groups: Vec<_> = schema.definitions.iter().filter(|d| d.name == "SubscriptionId").collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].fields.len(), 2);

    let names: Vec<&str> = schema.definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        &names[..4],
        &[
            "ChargingControlCreditControlRequestPB",
            "ChargingControlCreditControlAnswerPB",
            "GxCreditControlRequestPB",
            "GxCreditControlAnswerPB",
        ]
    );
}

const CONFLICT_A: &str = r#"<diameter>
  <application id="16777238" name="TGPP Gx">
    <command code="272" name="Credit-Control">
      <request><rule avp="Subscription-Id-PB" required="true" max="1"/></request>
      <answer/>
    </command>
    <avp name="Subscription-Id-PB" code="7000"><data type="Grouped">
      <rule avp="Session-Id" required="true" max="1"/>
      <rule avp="Origin-Host" required="true" max="1"/>
    </data></avp>
  </application>
</diameter>"#;

const CONFLICT_B: &str = r#"<diameter>
  <application id="16777236" name="TGPP Rx">
    <command code="265" name="AA">
      <request><rule avp="Subscription-Id-PB" required="true" max="1"/></request>
      <answer/>
    </command>
    <avp name="Subscription-Id-PB" code="7000"><data type="Grouped">
      <rule avp="Result-Code" required="true" max="1"/>
      <rule avp="CC-Request-Number" required="true" max="1"/>
    </data></avp>
  </application>
</diameter>"#;

#[test]
fn test_equal_size_conflict_halts() {
    let dict = dictionary(&[CONFLICT_A, CONFLICT_B]);
    let err = generate(&dict, &config(&[16777236, 16777238])).unwrap_err();
    assert!(
        matches!(err, GenerateError::TypeConflict(ref name) if name == "SubscriptionIdPB"),
        "expected a TypeConflict but got {:?}",
        err
    );
}

#[test]
fn test_unsupported_datatype_halts() {
    let odd = r#"<diameter><application id="4" name="Charging Control">
        <command code="1" name="Odd"><request><rule avp="Cost" required="true" max="1"/></request></command>
        <avp name="Cost" code="8000"><data type="Float32"/></avp>
    </application></diameter>"#;
    let dict = dictionary(&[odd]);
    let err = generate(&dict, &config(&[4])).unwrap_err();
    assert!(matches!(err, GenerateError::UnsupportedDataType { ref avp, .. } if avp == "Cost"));
}

#[test]
fn test_empty_enum_halts() {
    let odd = r#"<diameter><application id="4" name="Charging Control">
        <command code="1" name="Odd"><request><rule avp="Nothing" required="true" max="1"/></request></command>
        <avp name="Nothing" code="8001"><data type="Enumerated"/></avp>
    </application></diameter>"#;
    let dict = dictionary(&[odd]);
    let err = generate(&dict, &config(&[4])).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyEnum(ref name) if name == "NothingEnum"));
}
