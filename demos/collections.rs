//! Lists, maps and embedded fields.
//!
//! Run with: cargo run --example collections

use serde_human::{to_string, Field, Human, Struct, Value};
use std::collections::HashMap;
use std::error::Error;
use std::net::IpAddr;

struct Audit {
    created_by: String,
    revision: u32,
}

impl Human for Audit {
    fn describe(&self) -> Value {
        Struct::new()
            .with(Field::new("CreatedBy", &self.created_by))
            .with(Field::new("Revision", &self.revision))
            .into()
    }
}

struct Host {
    name: String,
    addr: IpAddr,
}

impl Human for Host {
    fn describe(&self) -> Value {
        Struct::new()
            .with(Field::new("Name", &self.name))
            .with(Field::new("Addr", &self.addr))
            .into()
    }
}

struct Inventory {
    audit: Audit,
    hosts: Vec<Host>,
    ports: HashMap<String, u16>,
    password: String,
}

impl Human for Inventory {
    fn describe(&self) -> Value {
        Struct::new()
            .with(Field::embedded("Audit", &self.audit))
            .with(Field::new("Hosts", &self.hosts))
            .with(Field::new("Ports", &self.ports))
            .with(Field::new("password", &self.password).private())
            .into()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut ports = HashMap::new();
    ports.insert("https".to_string(), 443);
    ports.insert("http".to_string(), 80);
    ports.insert("ssh".to_string(), 22);

    let inventory = Inventory {
        audit: Audit {
            created_by: "ops".to_string(),
            revision: 7,
        },
        hosts: vec![
            Host {
                name: "web-1".to_string(),
                addr: "10.0.0.1".parse()?,
            },
            Host {
                name: "web-2".to_string(),
                addr: "::1".parse()?,
            },
        ],
        ports,
        password: "hunter2".to_string(),
    };

    // Audit fields are flattened, ports are sorted, the password is private.
    print!("{}", to_string(&inventory)?);

    Ok(())
}
