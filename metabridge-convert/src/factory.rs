//! Bean factory: zero-argument construction from a runtime type name.
//!
//! Instead of reflective construction, every output type is registered
//! up front with a factory closure (`Default`-construct the bean, box it
//! as `dyn Any`) and its converter's supported input shapes. Asking for
//! an unregistered type is `InvalidBeanClass`; downcasting a registered
//! bean to the wrong family is `UnexpectedBeanClass`; asking a
//! registered family for a shape it never declared is
//! `UnimplementedConverterMethod` — discovered here at the boundary,
//! not deep inside a failed virtual call.

use crate::converter::{Converter, InputShape};
use crate::{ConversionError, ConversionResult};
use std::any::Any;
use std::collections::HashMap;
use tracing::debug;

type Constructor = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

struct Registration {
    construct: Constructor,
    shapes: &'static [InputShape],
}

/// Registry of output-type factories keyed by bean type name.
#[derive(Default)]
pub struct BeanFactory {
    registrations: HashMap<String, Registration>,
}

impl BeanFactory {
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bean type with its supported input shapes, replacing
    /// any previous registration under the same name.
    pub fn register<B>(&mut self, bean_type: impl Into<String>, shapes: &'static [InputShape])
    where
        B: Default + Any + Send,
    {
        let bean_type = bean_type.into();
        debug!(bean_type, ?shapes, "registering bean factory");
        self.registrations.insert(
            bean_type,
            Registration {
                construct: Box::new(|| Box::new(B::default())),
                shapes,
            },
        );
    }

    /// Registers a converter's bean family under the converter's own
    /// type name and declared shapes.
    pub fn register_converter<C>(&mut self, converter: &C)
    where
        C: Converter,
        C::Bean: Default + Any + Send,
    {
        self.register::<C::Bean>(converter.bean_type_name(), converter.supported_shapes());
    }

    /// True when a factory exists for `bean_type`.
    #[must_use]
    pub fn is_registered(&self, bean_type: &str) -> bool {
        self.registrations.contains_key(bean_type)
    }

    /// True when `bean_type` is registered and declared support for
    /// `shape`.
    #[must_use]
    pub fn supports(&self, bean_type: &str, shape: InputShape) -> bool {
        self.registrations
            .get(bean_type)
            .map(|r| r.shapes.contains(&shape))
            .unwrap_or(false)
    }

    /// Fails with `UnimplementedConverterMethod` unless `bean_type`
    /// declared support for `shape`. Callers use this to reject an
    /// unsupported request before any assembly work starts.
    pub fn ensure_shape(
        &self,
        bean_type: &str,
        shape: InputShape,
        converter: &'static str,
    ) -> ConversionResult<()> {
        if self.supports(bean_type, shape) {
            Ok(())
        } else {
            Err(ConversionError::UnimplementedConverterMethod {
                converter,
                operation: shape.operation(),
                bean_type: bean_type.to_string(),
            })
        }
    }

    /// Constructs a zero-initialized bean for `bean_type`.
    pub fn instantiate(&self, bean_type: &str) -> ConversionResult<Box<dyn Any + Send>> {
        let registration = self.registrations.get(bean_type).ok_or_else(|| {
            ConversionError::InvalidBeanClass {
                bean_type: bean_type.to_string(),
                detail: "no factory registered for this type".to_string(),
            }
        })?;
        Ok((registration.construct)())
    }

    /// Constructs a zero-initialized bean and downcasts it to the
    /// converter's expected family.
    pub fn instantiate_as<B: Any>(
        &self,
        bean_type: &str,
        converter: &'static str,
    ) -> ConversionResult<B> {
        let boxed = self.instantiate(bean_type)?;
        match boxed.downcast::<B>() {
            Ok(bean) => Ok(*bean),
            Err(_) => Err(ConversionError::UnexpectedBeanClass {
                converter,
                bean_type: bean_type.to_string(),
            }),
        }
    }
}
