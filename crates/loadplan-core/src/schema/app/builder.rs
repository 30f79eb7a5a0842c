use super::{BelongsTo, Field, FieldTy, HasMany, HasOne, Model, ModelId, Name, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Declares models by name and links their relations when built.
///
/// Relations reference their target model by name so models can be declared
/// in any order, including models that reference each other.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<ModelBuilder>,
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

#[derive(Debug)]
struct FieldDef {
    name: String,
    ty: FieldDefTy,
    nullable: bool,
    primary_key: bool,
}

#[derive(Debug)]
enum FieldDefTy {
    Primitive,
    BelongsTo(String),
    HasMany(String),
    HasOne(String),
}

impl Builder {
    /// Start declaring a model. Fields are added on the returned builder.
    pub fn model(&mut self, name: &str) -> &mut ModelBuilder {
        self.models.push(ModelBuilder {
            name: name.to_string(),
            fields: vec![],
        });
        self.models.last_mut().unwrap()
    }

    pub fn build(&self) -> Result<Schema> {
        let mut ids = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            if ids.insert(model.name.as_str(), ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is declared more than once",
                    model.name
                )));
            }
        }

        let mut models = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            let id = ModelId(index);
            let fields = model
                .fields
                .iter()
                .enumerate()
                .map(|(index, field)| model.build_field(id, index, field, &ids))
                .collect::<Result<Vec<_>>>()?;

            models.insert(
                id,
                Model {
                    id,
                    name: Name::new(&model.name),
                    fields,
                },
            );
        }

        Ok(Schema { models })
    }
}

impl ModelBuilder {
    /// Primary key column
    pub fn key(&mut self, name: &str) -> &mut Self {
        self.push(name, FieldDefTy::Primitive, false, true)
    }

    pub fn column(&mut self, name: &str) -> &mut Self {
        self.push(name, FieldDefTy::Primitive, false, false)
    }

    pub fn nullable_column(&mut self, name: &str) -> &mut Self {
        self.push(name, FieldDefTy::Primitive, true, false)
    }

    pub fn belongs_to(&mut self, name: &str, target: &str) -> &mut Self {
        self.push(name, FieldDefTy::BelongsTo(target.to_string()), true, false)
    }

    pub fn has_many(&mut self, name: &str, target: &str) -> &mut Self {
        self.push(name, FieldDefTy::HasMany(target.to_string()), false, false)
    }

    pub fn has_one(&mut self, name: &str, target: &str) -> &mut Self {
        self.push(name, FieldDefTy::HasOne(target.to_string()), true, false)
    }

    fn push(&mut self, name: &str, ty: FieldDefTy, nullable: bool, primary_key: bool) -> &mut Self {
        self.fields.push(FieldDef {
            name: name.to_string(),
            ty,
            nullable,
            primary_key,
        });
        self
    }

    fn build_field(
        &self,
        model: ModelId,
        index: usize,
        field: &FieldDef,
        ids: &IndexMap<&str, ModelId>,
    ) -> Result<Field> {
        if self.fields[..index].iter().any(|f| f.name == field.name) {
            return Err(Error::invalid_schema(format!(
                "field `{}::{}` is declared more than once",
                self.name, field.name
            )));
        }

        let target = |target: &str| {
            ids.get(target).copied().ok_or_else(|| {
                Error::invalid_schema(format!(
                    "field `{}::{}` references model `{}`, which was not registered with the schema",
                    self.name, field.name, target
                ))
            })
        };

        let ty = match &field.ty {
            FieldDefTy::Primitive => FieldTy::Primitive,
            FieldDefTy::BelongsTo(name) => FieldTy::BelongsTo(BelongsTo {
                target: target(name)?,
            }),
            FieldDefTy::HasMany(name) => FieldTy::HasMany(HasMany {
                target: target(name)?,
            }),
            FieldDefTy::HasOne(name) => FieldTy::HasOne(HasOne {
                target: target(name)?,
            }),
        };

        Ok(Field {
            id: model.field(index),
            name: field.name.clone(),
            ty,
            nullable: field.nullable,
            primary_key: field.primary_key,
        })
    }
}
