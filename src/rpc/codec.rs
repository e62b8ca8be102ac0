// file: src/rpc/codec.rs
// version: 1.0.0
// guid: 8b21d7e4-5c0a-4f93-a6d8-71e3c9b20f55

//! XML-RPC document encoding and decoding

use super::Value;
use crate::{Result, SwitchError};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Encode a `methodCall` document
pub fn encode_call(method: &str, params: &[Value]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<methodCall>\n<methodName>");
    out.push_str(&escape(method));
    out.push_str("</methodName>\n<params>\n");
    for param in params {
        out.push_str("<param>");
        write_value(&mut out, param);
        out.push_str("</param>\n");
    }
    out.push_str("</params>\n</methodCall>\n");
    out
}

fn write_value(out: &mut String, value: &Value) {
    out.push_str("<value>");
    match value {
        Value::Int(i) if i32::try_from(*i).is_ok() => {
            out.push_str(&format!("<int>{}</int>", i));
        }
        Value::Int(i) => out.push_str(&format!("<i8>{}</i8>", i)),
        Value::Boolean(b) => {
            out.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        Value::Double(d) => out.push_str(&format!("<double>{}</double>", d)),
        Value::DateTime(s) => {
            out.push_str("<dateTime.iso8601>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</dateTime.iso8601>");
        }
        Value::Base64(s) => {
            out.push_str("<base64>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</base64>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name.as_str()));
                out.push_str("</name>");
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
        Value::Nil => out.push_str("<nil/>"),
    }
    out.push_str("</value>");
}

/// Decode a `methodResponse` document.
///
/// A `fault` response becomes [`SwitchError::RemoteFault`].
pub fn decode_response(body: &str) -> Result<Value> {
    let doc = parse_document(body)?;
    if doc.name != "methodResponse" {
        return Err(SwitchError::malformed(format!(
            "expected <methodResponse>, found <{}>",
            doc.name
        )));
    }

    if let Some(fault) = doc.child("fault") {
        let value = fault
            .child("value")
            .ok_or_else(|| SwitchError::malformed("fault carries no value"))?;
        let detail = decode_value(value)?;
        let code = match detail.member("faultCode") {
            Some(Value::Int(code)) => *code,
            _ => 0,
        };
        let message = detail
            .member("faultString")
            .map(|s| s.to_string())
            .unwrap_or_else(|| detail.to_string());
        return Err(SwitchError::remote_fault(code, message));
    }

    let value = doc
        .child("params")
        .and_then(|params| params.child("param"))
        .and_then(|param| param.child("value"))
        .ok_or_else(|| SwitchError::malformed("response has neither a value nor a fault"))?;
    decode_value(value)
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn named(name: &[u8]) -> Result<Self> {
        let name = std::str::from_utf8(name)
            .map_err(|e| SwitchError::malformed(format!("element name is not UTF-8: {}", e)))?;
        Ok(Self {
            name: name.to_string(),
            ..Self::default()
        })
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    // Bottom entry is a synthetic document node.
    let mut stack = vec![Element::default()];

    loop {
        let event = reader.read_event().map_err(|e| {
            SwitchError::malformed(format!(
                "XML error at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(Element::named(start.local_name().as_ref())?),
            Event::Empty(start) => {
                let element = Element::named(start.local_name().as_ref())?;
                current(&mut stack)?.children.push(element);
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| SwitchError::malformed(format!("bad text: {}", e)))?;
                current(&mut stack)?.text.push_str(&text);
            }
            Event::CData(data) => {
                current(&mut stack)?
                    .text
                    .push_str(&String::from_utf8_lossy(&data));
            }
            Event::End(_) => {
                let element = match stack.pop() {
                    Some(element) if !stack.is_empty() => element,
                    _ => return Err(SwitchError::malformed("unbalanced closing tag")),
                };
                current(&mut stack)?.children.push(element);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(SwitchError::malformed("document ended inside an element"));
    }
    stack
        .pop()
        .and_then(|doc| doc.children.into_iter().next())
        .ok_or_else(|| SwitchError::malformed("empty response body"))
}

fn current(stack: &mut [Element]) -> Result<&mut Element> {
    stack
        .last_mut()
        .ok_or_else(|| SwitchError::malformed("content outside the document"))
}

fn decode_value(element: &Element) -> Result<Value> {
    // Untyped <value> content is a string.
    let Some(typed) = element.children.first() else {
        return Ok(Value::String(element.text.clone()));
    };
    let text = typed.text.as_str();

    match typed.name.as_str() {
        "i4" | "int" | "i8" => text
            .trim()
            .parse()
            .map(Value::Int)
            .map_err(|_| SwitchError::malformed(format!("bad integer: {}", text))),
        "boolean" => match text.trim() {
            "1" | "true" => Ok(Value::Boolean(true)),
            "0" | "false" => Ok(Value::Boolean(false)),
            other => Err(SwitchError::malformed(format!("bad boolean: {}", other))),
        },
        "string" => Ok(Value::String(text.to_string())),
        "double" => text
            .trim()
            .parse()
            .map(Value::Double)
            .map_err(|_| SwitchError::malformed(format!("bad double: {}", text))),
        "dateTime.iso8601" => Ok(Value::DateTime(text.trim().to_string())),
        "base64" => Ok(Value::Base64(text.trim().to_string())),
        "nil" => Ok(Value::Nil),
        "array" => {
            let data = typed
                .child("data")
                .ok_or_else(|| SwitchError::malformed("array without <data>"))?;
            data.children
                .iter()
                .filter(|c| c.name == "value")
                .map(decode_value)
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        "struct" => {
            let mut members = Vec::new();
            for member in typed.children.iter().filter(|c| c.name == "member") {
                let name = member
                    .child("name")
                    .ok_or_else(|| SwitchError::malformed("struct member without <name>"))?;
                let value = member
                    .child("value")
                    .ok_or_else(|| SwitchError::malformed("struct member without <value>"))?;
                members.push((name.text.clone(), decode_value(value)?));
            }
            Ok(Value::Struct(members))
        }
        other => Err(SwitchError::malformed(format!(
            "unsupported value type <{}>",
            other
        ))),
    }
}
