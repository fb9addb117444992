use dora_node_api::arrow::array::{Array, Float32Array, Float64Array};
use thermo_core::{Result, ThermoError};

/// Decode a temperature from an inbound arrow payload.
///
/// The upstream contract (confirmed out-of-band, not inferred): the payload
/// is a float array whose first element is the reading in °C.  Anything
/// else is a [`ThermoError::Decode`].
pub fn scalar_reading(array: &dyn Array) -> Result<f32> {
    if array.is_empty() {
        return Err(ThermoError::Decode("empty payload".into()));
    }

    if let Some(floats) = array.as_any().downcast_ref::<Float32Array>() {
        return Ok(floats.value(0));
    }
    if let Some(doubles) = array.as_any().downcast_ref::<Float64Array>() {
        return Ok(doubles.value(0) as f32);
    }

    Err(ThermoError::Decode(format!(
        "unsupported payload type {:?}",
        array.data_type()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dora_node_api::arrow::array::StringArray;

    #[test]
    fn decodes_first_f32_element() {
        let array = Float32Array::from(vec![20.1f32, 99.0]);
        assert_eq!(scalar_reading(&array).unwrap(), 20.1);
    }

    #[test]
    fn decodes_f64_payloads() {
        let array = Float64Array::from(vec![21.5f64]);
        assert_eq!(scalar_reading(&array).unwrap(), 21.5);
    }

    #[test]
    fn rejects_empty_payload() {
        let array = Float32Array::from(Vec::<f32>::new());
        let err = scalar_reading(&array).unwrap_err();
        assert!(matches!(err, ThermoError::Decode(_)));
    }

    #[test]
    fn rejects_non_float_payload() {
        let array = StringArray::from(vec!["23.4"]);
        let err = scalar_reading(&array).unwrap_err();
        assert!(matches!(err, ThermoError::Decode(_)));
    }
}
