use crate::Instance;

use loadplan_core::{
    schema::{app, ser},
    Result,
};

use serde_json::{Map, Value};

/// Serialize `instance` through `schema`, reading columns and relations the
/// way a serializer reads attributes: lazily, through the session.
///
/// Fields whose source attribute the model does not define are skipped.
pub fn dump(
    app: &app::Schema,
    registry: &ser::Registry,
    schema: &ser::Schema,
    instance: &mut Instance,
) -> Result<Value> {
    let model = app.model(instance.model())?;
    let mut out = Map::new();

    for field in schema.fields.values() {
        let source = field.source();

        let value = if model.is_column(source) {
            instance.column(source)?
        } else if model.is_relation(source) {
            let related = instance.related(source)?;

            match &field.ty {
                ser::FieldTy::Scalar => related
                    .first()
                    .map(|instance| Value::from(instance.key()))
                    .unwrap_or(Value::Null),
                ser::FieldTy::ScalarList => related
                    .iter()
                    .map(|instance| Value::from(instance.key()))
                    .collect(),
                ser::FieldTy::Nested(nested) => {
                    let nested = registry.instantiate(nested)?;
                    match related.first_mut() {
                        Some(instance) => dump(app, registry, &nested, instance)?,
                        None => Value::Null,
                    }
                }
                ser::FieldTy::NestedList(nested) => {
                    let nested = registry.instantiate(nested)?;
                    related
                        .iter_mut()
                        .map(|instance| dump(app, registry, &nested, instance))
                        .collect::<Result<Vec<_>>>()?
                        .into()
                }
            }
        } else {
            continue;
        };

        out.insert(field.name.clone(), value);
    }

    Ok(Value::Object(out))
}
