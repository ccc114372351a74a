//! Transfer object to domain model mappers.

use northwind_core::{BiMapper, Employee, Mapper, Product, ProductCategory};
use northwind_repository::{EmployeeTransferObject, ProductCategoryTransferObject, ProductTransferObject};

/// Maps product rows to [`Product`] and back.
pub struct ProductMapper;

impl Mapper<ProductTransferObject, Product> for ProductMapper {
    fn map(from: ProductTransferObject) -> Product {
        Product {
            id: from.id,
            name: from.name,
            supplier_id: from.supplier_id,
            category_id: from.category_id,
            quantity_per_unit: from.quantity_per_unit,
            unit_price: from.unit_price,
            units_in_stock: from.units_in_stock,
            units_on_order: from.units_on_order,
            reorder_level: from.reorder_level,
            discontinued: from.discontinued,
        }
    }
}

impl BiMapper<ProductTransferObject, Product> for ProductMapper {
    fn map_back(from: Product) -> ProductTransferObject {
        ProductTransferObject {
            id: from.id,
            name: from.name,
            supplier_id: from.supplier_id,
            category_id: from.category_id,
            quantity_per_unit: from.quantity_per_unit,
            unit_price: from.unit_price,
            units_in_stock: from.units_in_stock,
            units_on_order: from.units_on_order,
            reorder_level: from.reorder_level,
            discontinued: from.discontinued,
        }
    }
}

/// Maps category rows to [`ProductCategory`] and back.
pub struct ProductCategoryMapper;

impl Mapper<ProductCategoryTransferObject, ProductCategory> for ProductCategoryMapper {
    fn map(from: ProductCategoryTransferObject) -> ProductCategory {
        ProductCategory {
            id: from.id,
            name: from.name,
            description: from.description,
            picture: from.picture,
        }
    }
}

impl BiMapper<ProductCategoryTransferObject, ProductCategory> for ProductCategoryMapper {
    fn map_back(from: ProductCategory) -> ProductCategoryTransferObject {
        ProductCategoryTransferObject {
            id: from.id,
            name: from.name,
            description: from.description,
            picture: from.picture,
        }
    }
}

/// Maps employee rows to [`Employee`] and back.
pub struct EmployeeMapper;

impl Mapper<EmployeeTransferObject, Employee> for EmployeeMapper {
    fn map(from: EmployeeTransferObject) -> Employee {
        Employee {
            id: from.id,
            last_name: from.last_name,
            first_name: from.first_name,
            title: from.title,
            title_of_courtesy: from.title_of_courtesy,
            birth_date: from.birth_date,
            hire_date: from.hire_date,
            address: from.address,
            city: from.city,
            region: from.region,
            postal_code: from.postal_code,
            country: from.country,
            home_phone: from.home_phone,
            extension: from.extension,
            photo: from.photo,
            notes: from.notes,
            reports_to: from.reports_to,
            photo_path: from.photo_path,
        }
    }
}

impl BiMapper<EmployeeTransferObject, Employee> for EmployeeMapper {
    fn map_back(from: Employee) -> EmployeeTransferObject {
        EmployeeTransferObject {
            id: from.id,
            last_name: from.last_name,
            first_name: from.first_name,
            title: from.title,
            title_of_courtesy: from.title_of_courtesy,
            birth_date: from.birth_date,
            hire_date: from.hire_date,
            address: from.address,
            city: from.city,
            region: from.region,
            postal_code: from.postal_code,
            country: from.country,
            home_phone: from.home_phone,
            extension: from.extension,
            photo: from.photo,
            notes: from.notes,
            reports_to: from.reports_to,
            photo_path: from.photo_path,
        }
    }
}
